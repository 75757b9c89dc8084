//! The top-level `DNSMessage`: header plus four sections, with parse/pack,
//! equality, diff, and the textual renderers used for debugging and the
//! demonstration CLI.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::buffer::Buffer;
use crate::edns::Edns0;
use crate::enums::RecordType;
use crate::error::{DNSError, DNSResult};
use crate::header::Header;
use crate::question::Question;
use crate::rr::ResourceRecord;
use crate::wire::Wire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSMessage {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Default for DNSMessage {
    fn default() -> Self {
        DNSMessage {
            header: Header::default(),
            questions: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }
}

impl DNSMessage {
    /// Build a single-question query with a fresh random transaction id.
    pub fn query(qname: crate::name::DomainName, qtype: RecordType, qclass: crate::enums::RClass) -> Self {
        use rand::Rng;
        let mut msg = DNSMessage::default();
        msg.header.id = rand::thread_rng().gen();
        msg.header.qdcount = 1;
        msg.questions.push(Question { qname, qtype, qclass });
        msg
    }

    pub fn parse(bytes: &[u8]) -> DNSResult<Self> {
        let mut buffer = Buffer::from_bytes(bytes.to_vec());
        let mut msg = DNSMessage::default();
        msg.header.from_network_bytes(&mut buffer)?;
        trace!("parsed header id={:#06x}", msg.header.id);

        for _ in 0..msg.header.qdcount {
            let mut q = Question::default();
            q.from_network_bytes(&mut buffer)?;
            msg.questions.push(q);
        }

        msg.answers = read_rrs(&mut buffer, msg.header.ancount)?;
        msg.authority = read_rrs(&mut buffer, msg.header.nscount)?;
        msg.additional = read_rrs(&mut buffer, msg.header.arcount)?;

        let opt_count = msg.additional.iter().filter(|rr| rr.rtype() == RecordType::OPT).count();
        if opt_count > 1 {
            return Err(DNSError::DuplicateEdns);
        }

        debug!(
            "parsed message id={:#06x} qd={} an={} ns={} ar={}",
            msg.header.id,
            msg.questions.len(),
            msg.answers.len(),
            msg.authority.len(),
            msg.additional.len()
        );
        Ok(msg)
    }

    pub fn pack(&self) -> DNSResult<Vec<u8>> {
        let mut buffer = Buffer::new();
        buffer.reset_compression_table();

        let mut header = self.header.clone();
        header.qdcount = self.questions.len() as u16;
        header.ancount = self.answers.len() as u16;
        header.nscount = self.authority.len() as u16;
        header.arcount = self.additional.len() as u16;
        header.to_network_bytes(&mut buffer)?;

        for q in &self.questions {
            q.to_network_bytes(&mut buffer)?;
        }
        for rr in self.answers.iter().chain(&self.authority).chain(&self.additional) {
            rr.to_network_bytes(&mut buffer)?;
        }
        Ok(buffer.into_vec())
    }

    /// The OPT pseudo-record in the additional section, if any. Parsing
    /// already rejects more than one.
    pub fn edns(&self) -> Option<Edns0> {
        self.additional
            .iter()
            .find(|rr| rr.rtype() == RecordType::OPT)
            .and_then(Edns0::from_rr)
    }

    /// Order-sensitive equality is `derive(PartialEq)`'s `==`. This is the
    /// looser counterpart: two messages are semantically equal if each
    /// section matches up to reordering, compared by canonical zone text.
    pub fn semantically_eq(&self, other: &DNSMessage) -> bool {
        self.header == other.header
            && sorted_strings(&self.questions) == sorted_strings(&other.questions)
            && sorted_strings(&self.answers) == sorted_strings(&other.answers)
            && sorted_strings(&self.authority) == sorted_strings(&other.authority)
            && sorted_strings(&self.additional) == sorted_strings(&other.additional)
    }

    /// Per-section set difference, by canonical textual form.
    pub fn diff(&self, other: &DNSMessage) -> MessageDiff {
        MessageDiff {
            questions: set_diff(&self.questions, &other.questions),
            answers: set_diff(&self.answers, &other.answers),
            authority: set_diff(&self.authority, &other.authority),
            additional: set_diff(&self.additional, &other.additional),
        }
    }

    /// One rdata per line from the answer section, the way `dig +short` does.
    pub fn short(&self) -> String {
        self.answers
            .iter()
            .map(|rr| rr.rdata.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full zone-format rendering of the message.
    pub fn to_zone(&self) -> String {
        crate::zone::render(self)
    }
}

fn sorted_strings<T: fmt::Display>(items: &[T]) -> Vec<String> {
    let mut v: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    v.sort();
    v
}

fn set_diff<T: fmt::Display>(a: &[T], b: &[T]) -> (Vec<String>, Vec<String>) {
    let a_set: HashSet<String> = a.iter().map(|i| i.to_string()).collect();
    let b_set: HashSet<String> = b.iter().map(|i| i.to_string()).collect();
    let mut a_only: Vec<String> = a_set.difference(&b_set).cloned().collect();
    let mut b_only: Vec<String> = b_set.difference(&a_set).cloned().collect();
    a_only.sort();
    b_only.sort();
    (a_only, b_only)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDiff {
    pub questions: (Vec<String>, Vec<String>),
    pub answers: (Vec<String>, Vec<String>),
    pub authority: (Vec<String>, Vec<String>),
    pub additional: (Vec<String>, Vec<String>),
}

fn read_rrs(buffer: &mut Buffer, count: u16) -> DNSResult<Vec<ResourceRecord>> {
    let mut rrs = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut rr = ResourceRecord::new(
            crate::name::DomainName::root(),
            crate::enums::RClass::IN,
            0,
            crate::rdata::RData::Unknown(Vec::new()),
        );
        rr.from_network_bytes(buffer)?;
        rrs.push(rr);
    }
    Ok(rrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RClass;
    use crate::name::DomainName;
    use crate::rdata::{RData, A};
    use std::net::Ipv4Addr;

    fn query_message() -> DNSMessage {
        DNSMessage::query(
            DomainName::try_from("www.example.com.").unwrap(),
            RecordType::A,
            RClass::IN,
        )
    }

    #[test]
    fn query_roundtrips_through_wire() {
        let msg = query_message();
        let bytes = msg.pack().unwrap();
        let parsed = DNSMessage::parse(&bytes).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn response_with_compressed_answers_roundtrips() {
        let mut msg = query_message();
        msg.header.qr = crate::enums::PacketType::Response;
        let name = DomainName::try_from("www.example.com.").unwrap();
        msg.answers.push(ResourceRecord::new(
            name.clone(),
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(1, 2, 3, 4))),
        ));
        msg.answers.push(ResourceRecord::new(
            name,
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(5, 6, 7, 8))),
        ));
        msg.header.ancount = 2;

        let bytes = msg.pack().unwrap();
        let parsed = DNSMessage::parse(&bytes).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.short(), "1.2.3.4\n5.6.7.8");
    }

    #[test]
    fn section_count_mismatch_is_rejected() {
        let mut msg = query_message();
        let bytes = msg.pack().unwrap();
        msg.header.qdcount = 2; // lie about the count after packing
        let mut tampered = bytes.clone();
        tampered[4] = 0;
        tampered[5] = 2;
        assert!(DNSMessage::parse(&tampered).is_err());
    }

    #[test]
    fn duplicate_edns_is_rejected() {
        let mut msg = query_message();
        let edns = Edns0::new(4096, false, vec![]);
        msg.additional.push(edns.to_rr());
        msg.additional.push(edns.to_rr());
        msg.header.arcount = 2;
        let bytes = msg.pack().unwrap();
        assert!(matches!(DNSMessage::parse(&bytes), Err(DNSError::DuplicateEdns)));
    }

    #[test]
    fn semantic_equality_ignores_answer_order() {
        let mut a = query_message();
        let mut b = query_message();
        b.header.id = a.header.id;
        let name = DomainName::try_from("www.example.com.").unwrap();
        let r1 = ResourceRecord::new(name.clone(), RClass::IN, 300, RData::A(A(Ipv4Addr::new(1, 1, 1, 1))));
        let r2 = ResourceRecord::new(name, RClass::IN, 300, RData::A(A(Ipv4Addr::new(2, 2, 2, 2))));
        a.answers = vec![r1.clone(), r2.clone()];
        b.answers = vec![r2, r1];
        assert_ne!(a, b); // order-sensitive default equality differs
        assert!(a.semantically_eq(&b));
    }

    #[test]
    fn diff_reports_only_the_differing_rrs() {
        let mut a = query_message();
        let mut b = query_message();
        b.header.id = a.header.id;
        let name = DomainName::try_from("www.example.com.").unwrap();
        a.answers = vec![ResourceRecord::new(
            name.clone(),
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(1, 1, 1, 1))),
        )];
        b.answers = vec![ResourceRecord::new(
            name,
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(2, 2, 2, 2))),
        )];
        let diff = a.diff(&b);
        assert_eq!(diff.answers.0.len(), 1);
        assert_eq!(diff.answers.1.len(), 1);
    }
}
