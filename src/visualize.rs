use std::fmt;

use crate::signature::{Layout, Signature};

/// Text listing of a signature sequence, in input order.
pub struct Listing<'a>(pub &'a [Signature]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for signature in self.0 {
            let tag = signature.classification();
            match signature.layout() {
                Layout::Fundamental { .. } | Layout::Simple { .. } => writeln!(
                    f,
                    "[{tag}] -- {} ({})",
                    signature.name(),
                    signature.immediate_length_bytes()
                )?,
                Layout::Complex { members, .. } => {
                    writeln!(f, "[{tag}] -- {}", signature.name())?;
                    for member in members {
                        writeln!(
                            f,
                            "> +{}: {} ({})",
                            member.offset, member.type_name, member.name
                        )?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Renders signatures as text: one line per register-resident signature, a
/// header plus one line per member for complex ones.
pub fn render(signatures: &[Signature]) -> String {
    Listing(signatures).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Member;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_classification() {
        let signatures = vec![
            Signature::fundamental("byte", 1),
            Signature::simple("int", 4),
            Signature::complex(
                "Vector",
                vec![Member::new("int", "x", 0), Member::new("int", "y", 4)],
            ),
        ];

        assert_eq!(
            render(&signatures),
            "[FUNDAMENTAL] -- byte (1)\n\
             [SIMPLE] -- int (4)\n\
             [COMPLEX] -- Vector\n\
             > +0: int (x)\n\
             > +4: int (y)\n"
        );
    }

    #[test]
    fn complex_without_members_is_header_only() {
        let signatures = [Signature::complex("Opaque", vec![])];
        assert_eq!(render(&signatures), "[COMPLEX] -- Opaque\n");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[]), "");
    }
}
