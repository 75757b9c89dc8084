//! End-to-end parse/pack scenarios over full messages, exercising the
//! public API the way an embedding application would.

use std::net::Ipv4Addr;

use dnslib::enums::{PacketType, RClass, RecordType};
use dnslib::message::DNSMessage;
use dnslib::name::DomainName;
use dnslib::rdata::{RData, Txt, A};
use dnslib::rr::ResourceRecord;

#[test]
fn query_then_response_roundtrip_with_compression() {
    let mut query = DNSMessage::query(
        DomainName::try_from("www.example.com.").unwrap(),
        RecordType::A,
        RClass::IN,
    );
    let wire = query.pack().unwrap();
    let parsed_query = DNSMessage::parse(&wire).unwrap();
    assert_eq!(parsed_query, query);

    query.header.qr = PacketType::Response;
    let name = DomainName::try_from("www.example.com.").unwrap();
    query.answers.push(ResourceRecord::new(
        name.clone(),
        RClass::IN,
        300,
        RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
    ));
    query.answers.push(ResourceRecord::new(
        name,
        RClass::IN,
        300,
        RData::A(A(Ipv4Addr::new(93, 184, 216, 35))),
    ));

    let wire = query.pack().unwrap();
    // two answers sharing the question's name should compress down to a
    // pointer each: far smaller than writing "www.example.com." twice more.
    assert!(wire.len() < 12 + 4 + 17 + 2 * (2 + 2 + 2 + 4 + 2 + 4));

    let response = DNSMessage::parse(&wire).unwrap();
    assert_eq!(response, query);
    assert_eq!(response.short(), "93.184.216.34\n93.184.216.35");
}

#[test]
fn unknown_type_survives_parse_and_repack() {
    let mut msg = DNSMessage::query(
        DomainName::try_from("example.com.").unwrap(),
        RecordType::A,
        RClass::IN,
    );
    msg.header.qr = PacketType::Response;
    msg.answers.push(ResourceRecord::new(
        DomainName::try_from("example.com.").unwrap(),
        RClass::IN,
        60,
        RData::Unknown(vec![0xDE, 0xAD, 0xBE, 0xEF]),
    ));

    let wire = msg.pack().unwrap();
    let parsed = DNSMessage::parse(&wire).unwrap();
    assert_eq!(parsed, msg);
    assert!(parsed.answers[0].to_string().contains("\\# 4 DEADBEEF"));
}

#[test]
fn txt_record_with_multiple_chunks_survives_roundtrip() {
    let mut msg = DNSMessage::query(
        DomainName::try_from("example.com.").unwrap(),
        RecordType::TXT,
        RClass::IN,
    );
    msg.header.qr = PacketType::Response;
    msg.answers.push(ResourceRecord::new(
        DomainName::try_from("example.com.").unwrap(),
        RClass::IN,
        60,
        RData::Txt(Txt(vec!["hello".into(), "world".into()])),
    ));

    let wire = msg.pack().unwrap();
    let parsed = DNSMessage::parse(&wire).unwrap();
    assert_eq!(parsed, msg);
}

#[test]
fn malicious_self_pointer_does_not_loop_forever() {
    // Header claims one answer whose name is a pointer to itself.
    let mut bytes = vec![
        0x00, 0x00, // id
        0x80, 0x00, // flags: response
        0x00, 0x00, // qdcount
        0x00, 0x01, // ancount
        0x00, 0x00, // nscount
        0x00, 0x00, // arcount
    ];
    let self_pointer_offset = bytes.len();
    bytes.push(0xC0);
    bytes.push(self_pointer_offset as u8);
    bytes.extend_from_slice(&[0, 1]); // type A
    bytes.extend_from_slice(&[0, 1]); // class IN
    bytes.extend_from_slice(&[0, 0, 0, 60]); // ttl
    bytes.extend_from_slice(&[0, 4]); // rdlength
    bytes.extend_from_slice(&[1, 2, 3, 4]);

    assert!(DNSMessage::parse(&bytes).is_err());
}
