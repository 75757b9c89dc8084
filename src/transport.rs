//! A thin synchronous transport helper. Not part of the wire-format core;
//! `send` packs a query, writes it to a UDP datagram or a length-prefixed
//! TCP stream, and reads back one reply. No retry, no async runtime -- see
//! DESIGN.md for why.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use log::debug;

use crate::error::DNSError;
use crate::message::DNSMessage;

pub fn send(
    query: &DNSMessage,
    addr: impl ToSocketAddrs,
    tcp: bool,
    timeout: Duration,
) -> Result<DNSMessage, DNSError> {
    let bytes = query.pack()?;
    let reply_bytes = if tcp {
        send_tcp(&bytes, addr, timeout)?
    } else {
        send_udp(&bytes, addr, timeout)?
    };

    let reply = DNSMessage::parse(&reply_bytes)?;
    if reply.header.id != query.header.id {
        return Err(DNSError::TransactionIdMismatch {
            want: query.header.id,
            got: reply.header.id,
        });
    }
    debug!("received reply id={:#06x}, tc={}", reply.header.id, reply.header.tc);
    Ok(reply)
}

fn send_udp(bytes: &[u8], addr: impl ToSocketAddrs, timeout: Duration) -> Result<Vec<u8>, DNSError> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_read_timeout(Some(timeout))?;
    socket.connect(addr)?;
    socket.send(bytes)?;

    let mut buf = [0u8; 65535];
    let n = socket.recv(&mut buf)?;
    Ok(buf[..n].to_vec())
}

fn send_tcp(bytes: &[u8], addr: impl ToSocketAddrs, timeout: Duration) -> Result<Vec<u8>, DNSError> {
    let mut stream = TcpStream::connect(addr)?;
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;

    let len = (bytes.len() as u16).to_be_bytes();
    stream.write_all(&len)?;
    stream.write_all(bytes)?;

    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf)?;
    let reply_len = u16::from_be_bytes(len_buf) as usize;

    let mut reply = vec![0u8; reply_len];
    stream.read_exact(&mut reply)?;
    Ok(reply)
}
