//! Zone/presentation-format rendering. This crate only ever *produces* this
//! text (parsing it back is an external collaborator's job, e.g. a
//! `dig`-style test harness sitting on top of this library).

use crate::message::DNSMessage;

pub fn render(msg: &DNSMessage) -> String {
    let mut out = String::new();
    out.push_str(&msg.header.to_string());
    out.push('\n');

    if !msg.questions.is_empty() {
        out.push_str(";; QUESTION SECTION:\n");
        for q in &msg.questions {
            out.push_str(&format!(";{}\n", q));
        }
    }

    render_section(&mut out, "ANSWER", &msg.answers);
    render_section(&mut out, "AUTHORITY", &msg.authority);
    render_section(&mut out, "ADDITIONAL", &msg.additional);

    if let Some(edns) = msg.edns() {
        out.push_str(&edns.to_string());
        out.push('\n');
    }

    out
}

fn render_section(out: &mut String, title: &str, rrs: &[crate::rr::ResourceRecord]) {
    if rrs.is_empty() {
        return;
    }
    out.push_str(&format!(";; {title} SECTION:\n"));
    for rr in rrs {
        out.push_str(&rr.to_string());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{PacketType, RClass, RecordType};
    use crate::name::DomainName;
    use crate::rdata::{RData, A};
    use std::net::Ipv4Addr;

    #[test]
    fn renders_question_and_answer_sections() {
        let mut msg = DNSMessage::query(
            DomainName::try_from("example.com.").unwrap(),
            RecordType::A,
            RClass::IN,
        );
        msg.header.qr = PacketType::Response;
        msg.answers.push(crate::rr::ResourceRecord::new(
            DomainName::try_from("example.com.").unwrap(),
            RClass::IN,
            300,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        ));

        let text = msg.to_zone();
        assert!(text.contains("QUESTION SECTION"));
        assert!(text.contains("ANSWER SECTION"));
        assert!(text.contains("93.184.216.34"));
    }
}
