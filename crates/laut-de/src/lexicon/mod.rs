// German morph and symbol lexicon with validated construction

use hashbrown::{HashMap, HashSet};
use laut_core::character;

mod data;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural defects in the compiled-in lexicon data.
///
/// Any of these is a configuration error: construction fails before a single
/// word can be transcribed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("duplicate morph {morph:?} in the {table} table")]
    DuplicateMorph { table: &'static str, morph: String },
    #[error("empty morph or empty IPA value in the {table} table")]
    EmptyEntry { table: &'static str },
    #[error("vowel {0:?} lacks an open or closed quality value")]
    MissingVowelQuality(char),
    #[error("inseparable prefix {0:?} is missing from the prefix table")]
    UnknownInseparablePrefix(String),
}

// ---------------------------------------------------------------------------
// Suffix matching
// ---------------------------------------------------------------------------

/// Result of matching a suffix morph at the end of a root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Length of the matched morph in characters.
    pub len: usize,
    /// True when the morph came from the stress-bearing table.
    pub stressed: bool,
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// The static German pronunciation lexicon.
///
/// Wraps the raw tables in hashed lookup structures and owns the matching
/// policy the analyzer relies on: longest match at a fixed position, with
/// the stress-bearing suffix table consulted before the unstressed one.
/// Built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    prefixes: HashMap<&'static str, &'static str>,
    inseparable_prefixes: HashSet<&'static str>,
    unstressed_suffixes: HashMap<&'static str, &'static str>,
    stressed_suffixes: HashMap<&'static str, &'static str>,
    diphthongs: HashMap<&'static str, &'static str>,
    easy_clusters: HashMap<&'static str, &'static str>,
    max_prefix_len: usize,
    max_unstressed_len: usize,
    max_stressed_len: usize,
}

impl Lexicon {
    /// Build the lexicon, validating the structural invariants of the data.
    pub fn new() -> Result<Self, LexiconError> {
        let prefixes = build_map("prefix", data::PREFIXES)?;
        let unstressed_suffixes = build_map("unstressed suffix", data::UNSTRESSED_SUFFIXES)?;
        let stressed_suffixes = build_map("stressed suffix", data::STRESSED_SUFFIXES)?;
        let diphthongs = build_map("diphthong", data::DIPHTHONGS)?;
        let easy_clusters = build_map("easy cluster", data::EASY_CLUSTERS)?;

        let mut inseparable_prefixes = HashSet::with_capacity(data::INSEPARABLE_PREFIXES.len());
        for &morph in data::INSEPARABLE_PREFIXES {
            if !prefixes.contains_key(morph) {
                return Err(LexiconError::UnknownInseparablePrefix(morph.to_string()));
            }
            inseparable_prefixes.insert(morph);
        }

        for &vowel in character::GERMAN_VOWELS {
            let covered = data::CLOSED_VOWELS.iter().any(|&(v, _)| v == vowel)
                && data::OPEN_VOWELS.iter().any(|&(v, _)| v == vowel);
            if !covered {
                return Err(LexiconError::MissingVowelQuality(vowel));
            }
        }

        let max_prefix_len = max_key_len(&prefixes);
        let max_unstressed_len = max_key_len(&unstressed_suffixes);
        let max_stressed_len = max_key_len(&stressed_suffixes);

        Ok(Self {
            prefixes,
            inseparable_prefixes,
            unstressed_suffixes,
            stressed_suffixes,
            diphthongs,
            easy_clusters,
            max_prefix_len,
            max_unstressed_len,
            max_stressed_len,
        })
    }

    // -- morph lookups ------------------------------------------------------

    /// True if `morph` is a known verb prefix.
    pub fn is_prefix(&self, morph: &str) -> bool {
        self.prefixes.contains_key(morph)
    }

    /// True if `morph` is one of the unaccented inseparable prefixes.
    pub fn is_inseparable_prefix(&self, morph: &str) -> bool {
        self.inseparable_prefixes.contains(morph)
    }

    /// IPA value of a prefix morph.
    pub fn prefix_ipa(&self, morph: &str) -> Option<&'static str> {
        self.prefixes.get(morph).copied()
    }

    /// IPA value of an unstressed suffix morph.
    pub fn unstressed_suffix_ipa(&self, morph: &str) -> Option<&'static str> {
        self.unstressed_suffixes.get(morph).copied()
    }

    /// IPA value of a stress-bearing suffix morph.
    pub fn stressed_suffix_ipa(&self, morph: &str) -> Option<&'static str> {
        self.stressed_suffixes.get(morph).copied()
    }

    // -- positional matching ------------------------------------------------

    /// Length in characters of the longest prefix morph matching the front
    /// of `chars`, if any.
    pub fn front_prefix_match(&self, chars: &[char]) -> Option<usize> {
        let upper = self.max_prefix_len.min(chars.len());
        for len in (1..=upper).rev() {
            let candidate: String = chars[..len].iter().collect();
            if self.prefixes.contains_key(candidate.as_str()) {
                return Some(len);
            }
        }
        None
    }

    /// Longest suffix morph matching the back of `chars`.
    ///
    /// The stress-bearing table is consulted first and wins outright; only
    /// when no stressed morph matches is the unstressed table searched.
    pub fn back_suffix_match(&self, chars: &[char]) -> Option<SuffixMatch> {
        if let Some(len) = longest_back(&self.stressed_suffixes, self.max_stressed_len, chars) {
            return Some(SuffixMatch {
                len,
                stressed: true,
            });
        }
        longest_back(&self.unstressed_suffixes, self.max_unstressed_len, chars).map(|len| {
            SuffixMatch {
                len,
                stressed: false,
            }
        })
    }

    // -- letter and letter-group lookups ------------------------------------

    /// Closed (tense) quality of a vowel letter.
    pub fn closed_vowel(&self, c: char) -> Option<&'static str> {
        lookup_char(data::CLOSED_VOWELS, c)
    }

    /// Open (lax) quality of a vowel letter.
    pub fn open_vowel(&self, c: char) -> Option<&'static str> {
        lookup_char(data::OPEN_VOWELS, c)
    }

    /// Fixed realization of a context-free consonant letter.
    pub fn plain_consonant(&self, c: char) -> Option<&'static str> {
        lookup_char(data::PLAIN_CONSONANTS, c)
    }

    /// Fortis (devoiced) realization of an alternating consonant.
    pub fn fortis(&self, c: char) -> Option<&'static str> {
        lookup_char(data::FORTIS_ALTERNANTS, c)
    }

    /// Lenis (voiced) realization of an alternating consonant.
    pub fn lenis(&self, c: char) -> Option<&'static str> {
        lookup_char(data::LENIS_ALTERNANTS, c)
    }

    /// Fixed reading of a diphthong.
    pub fn diphthong_ipa(&self, run: &str) -> Option<&'static str> {
        self.diphthongs.get(run).copied()
    }

    /// Fixed reading of an easy consonant group.
    pub fn easy_cluster_ipa(&self, cluster: &str) -> Option<&'static str> {
        self.easy_clusters.get(cluster).copied()
    }

    /// Length in characters of the longest known consonant group at the
    /// front of `chars`, if any.
    pub fn longest_cluster_prefix(&self, chars: &[char]) -> Option<usize> {
        let mut best = 0;
        for &entry in data::KNOWN_CLUSTERS {
            let n = entry.chars().count();
            if n > best && n <= chars.len() && starts_with_chars(chars, entry) {
                best = n;
            }
        }
        (best > 0).then_some(best)
    }

    /// Length in characters of the longest known consonant group at the
    /// back of `chars`, if any.
    pub fn longest_cluster_suffix(&self, chars: &[char]) -> Option<usize> {
        let mut best = 0;
        for &entry in data::KNOWN_CLUSTERS {
            let n = entry.chars().count();
            if n > best && n <= chars.len() && starts_with_chars(&chars[chars.len() - n..], entry) {
                best = n;
            }
        }
        (best > 0).then_some(best)
    }
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

fn build_map(
    table: &'static str,
    entries: &'static [(&'static str, &'static str)],
) -> Result<HashMap<&'static str, &'static str>, LexiconError> {
    let mut map = HashMap::with_capacity(entries.len());
    for &(morph, ipa) in entries {
        if morph.is_empty() || ipa.is_empty() {
            return Err(LexiconError::EmptyEntry { table });
        }
        if map.insert(morph, ipa).is_some() {
            return Err(LexiconError::DuplicateMorph {
                table,
                morph: morph.to_string(),
            });
        }
    }
    Ok(map)
}

fn max_key_len(map: &HashMap<&'static str, &'static str>) -> usize {
    map.keys().map(|k| k.chars().count()).max().unwrap_or(0)
}

fn longest_back(
    map: &HashMap<&'static str, &'static str>,
    max_len: usize,
    chars: &[char],
) -> Option<usize> {
    let upper = max_len.min(chars.len());
    for len in (1..=upper).rev() {
        let candidate: String = chars[chars.len() - len..].iter().collect();
        if map.contains_key(candidate.as_str()) {
            return Some(len);
        }
    }
    None
}

fn lookup_char(table: &[(char, &'static str)], c: char) -> Option<&'static str> {
    table.iter().find(|&&(k, _)| k == c).map(|&(_, v)| v)
}

fn starts_with_chars(haystack: &[char], needle: &str) -> bool {
    let mut i = 0;
    for nc in needle.chars() {
        if i >= haystack.len() || haystack[i] != nc {
            return false;
        }
        i += 1;
    }
    true
}
