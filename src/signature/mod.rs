pub mod member;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use member::Member;

/// Width of the pointer that stands in for a complex value in registers.
pub const POINTER_WIDTH: u32 = 8;

/// Length the parser records for complex signatures. Never reported.
pub const COMPLEX_STORED_LENGTH: u32 = 4;

/// How a type is held by the generated code.
///
/// A *fundamental* holds exactly one value of at most 8 bytes. A *simple*
/// also fits in 8 bytes but may name members of its own. A *complex* lives on
/// the heap; registers only ever carry the pointer to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Fundamental,
    Simple,
    Complex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "classification", rename_all = "lowercase")]
pub enum Layout {
    Fundamental { length: u8 },
    Simple { length: u8 },
    Complex {
        stored_length: u32,
        members: Vec<Member>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    #[serde(flatten)]
    layout: Layout,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match *self {
            Classification::Fundamental => "FUNDAMENTAL",
            Classification::Simple => "SIMPLE",
            Classification::Complex => "COMPLEX",
        };

        write!(f, "{tag}")
    }
}

impl Layout {
    #[inline]
    pub fn classification(&self) -> Classification {
        match self {
            Layout::Fundamental { .. } => Classification::Fundamental,
            Layout::Simple { .. } => Classification::Simple,
            Layout::Complex { .. } => Classification::Complex,
        }
    }
}

impl Signature {
    pub fn new(name: impl Into<String>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }

    pub fn fundamental(name: impl Into<String>, length: u8) -> Self {
        Self::new(name, Layout::Fundamental { length })
    }

    pub fn simple(name: impl Into<String>, length: u8) -> Self {
        Self::new(name, Layout::Simple { length })
    }

    pub fn complex(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self::complex_with_length(name, COMPLEX_STORED_LENGTH, members)
    }

    /// Builds a complex signature with an explicit stored length. The stored
    /// value is kept but `immediate_length_bytes` still reports the pointer
    /// width.
    pub fn complex_with_length(
        name: impl Into<String>,
        stored_length: u32,
        members: Vec<Member>,
    ) -> Self {
        Self::new(
            name,
            Layout::Complex {
                stored_length,
                members,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn classification(&self) -> Classification {
        self.layout.classification()
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        self.classification() == Classification::Complex
    }

    /// Bytes the value occupies when held directly in a register.
    pub fn immediate_length_bytes(&self) -> u32 {
        match self.layout {
            Layout::Fundamental { length } | Layout::Simple { length } => length as u32,
            Layout::Complex { .. } => POINTER_WIDTH,
        }
    }

    /// Members in declaration order; `None` unless the signature is complex.
    pub fn members(&self) -> Option<&[Member]> {
        match &self.layout {
            Layout::Complex { members, .. } => Some(members),
            _ => None,
        }
    }
}
