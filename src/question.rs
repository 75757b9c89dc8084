//! The question-section entry: qname, qtype, qclass.

use std::fmt;

use dns_derive::DnsStruct;

use crate::enums::{RClass, RecordType};
use crate::name::DomainName;

#[derive(Debug, Clone, Default, PartialEq, Eq, DnsStruct)]
pub struct Question {
    pub qname: DomainName,
    pub qtype: RecordType,
    pub qclass: RClass,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.qname,
            self.qclass.name().unwrap_or("CLASS?"),
            self.qtype
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::wire::Wire;

    #[test]
    fn question_roundtrip() {
        let q = Question {
            qname: DomainName::try_from("www.example.com.").unwrap(),
            qtype: RecordType::A,
            qclass: RClass::IN,
        };
        let mut buf = Buffer::new();
        q.to_network_bytes(&mut buf).unwrap();
        let mut read = Buffer::from_bytes(buf.into_vec());
        let mut out = Question::default();
        out.from_network_bytes(&mut read).unwrap();
        assert_eq!(out, q);
    }
}
