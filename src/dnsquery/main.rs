//! A minimal `dig`-alike: send one query, print the decoded response.
//! Demonstrates the wire-format core end to end -- no resolver, no retry
//! loop.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

use dnslib::enums::{RClass, RecordType};
use dnslib::message::DNSMessage;
use dnslib::name::DomainName;

#[derive(Parser)]
#[command(name = "dnsquery", about = "Send a single DNS query and print the response")]
struct Args {
    /// Name to query, e.g. www.example.com
    qname: String,

    /// Record type, e.g. A, AAAA, MX, NS, TXT
    #[arg(short = 't', long = "type", default_value = "A")]
    qtype: String,

    /// Server to query
    #[arg(short = 's', long = "server", default_value = "8.8.8.8:53")]
    server: String,

    /// Use TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Reply timeout, in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,

    /// Print the full zone-format output instead of just the answer rdata
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let qname = match DomainName::try_from(args.qname.as_str()) {
        Ok(n) => n,
        Err(e) => {
            error!("invalid name '{}': {e}", args.qname);
            return ExitCode::FAILURE;
        }
    };
    let qtype: RecordType = match args.qtype.parse() {
        Ok(t) => t,
        Err(_) => RecordType(args.qtype.parse::<u16>().unwrap_or(1)),
    };

    let query = DNSMessage::query(qname, qtype, RClass::IN);
    let timeout = Duration::from_millis(args.timeout_ms);

    match dnslib::transport::send(&query, args.server.as_str(), args.tcp, timeout) {
        Ok(reply) => {
            if args.verbose {
                println!("{}", reply.to_zone());
            } else {
                println!("{}", reply.short());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("query failed: {e}");
            ExitCode::FAILURE
        }
    }
}
