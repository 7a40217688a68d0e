use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The six Holland interest themes, in canonical R-I-A-S-E-C order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Trait {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Trait {
    pub const ALL: [Trait; 6] = [
        Trait::Realistic,
        Trait::Investigative,
        Trait::Artistic,
        Trait::Social,
        Trait::Enterprising,
        Trait::Conventional,
    ];

    pub fn letter(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    /// Resolves a sheet header: either the one-letter code or the full name.
    pub fn from_header(header: &str) -> Option<Trait> {
        let header = header.trim();
        Self::ALL.into_iter().find(|candidate| {
            header.eq_ignore_ascii_case(candidate.name())
                || (header.len() == 1
                    && header
                        .chars()
                        .next()
                        .is_some_and(|c| c.eq_ignore_ascii_case(&candidate.letter())))
        })
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per trait. Always total: every trait has a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitMap<T>([T; 6]);

impl<T: Copy> TraitMap<T> {
    pub fn from_fn(mut f: impl FnMut(Trait) -> T) -> Self {
        Self(Trait::ALL.map(&mut f))
    }

    pub fn get(&self, t: Trait) -> T {
        self.0[t.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, T)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

impl<T: Copy + Serialize> Serialize for TraitMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let by_letter: BTreeMap<String, T> = self
            .iter()
            .map(|(t, value)| (t.letter().to_string(), value))
            .collect();
        by_letter.serialize(serializer)
    }
}

/// `None` marks a score cell that could not be read.
pub type RawScoreSet = TraitMap<Option<i64>>;
pub type PercentileSet = TraitMap<u8>;

/// Top three traits in descending percentile order. Never alphabetized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCode([Trait; 3]);

impl RankedCode {
    pub fn new(traits: [Trait; 3]) -> Self {
        Self(traits)
    }

    pub fn traits(&self) -> [Trait; 3] {
        self.0
    }

    pub fn strongest(&self) -> Trait {
        self.0[0]
    }
}

impl fmt::Display for RankedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.0 {
            write!(f, "{}", t.letter())?;
        }
        Ok(())
    }
}

impl Serialize for RankedCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
