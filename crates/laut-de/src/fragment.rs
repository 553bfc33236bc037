// Root fragmentation into consonant and vowel runs

use laut_core::character;

// ---------------------------------------------------------------------------
// Fragment model
// ---------------------------------------------------------------------------

/// The kind of a root fragment, without its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Consonant,
    Cluster,
    Vowel,
    Diphthong,
}

/// One fragment of a root: a maximal same-class letter run.
///
/// A consonant run of length one is a `Consonant`, longer runs are a
/// `Cluster`; vowel runs likewise become `Vowel` or `Diphthong`. The
/// apostrophe counts as vowel-class here so that elided spellings like
/// "wen'ge" keep their shape; the vowel rule later drops it silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Consonant(char),
    Cluster(String),
    Vowel(char),
    Diphthong(String),
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Consonant(_) => FragmentKind::Consonant,
            Fragment::Cluster(_) => FragmentKind::Cluster,
            Fragment::Vowel(_) => FragmentKind::Vowel,
            Fragment::Diphthong(_) => FragmentKind::Diphthong,
        }
    }

    /// First character of the fragment's text.
    pub fn first_char(&self) -> Option<char> {
        match self {
            Fragment::Consonant(c) | Fragment::Vowel(c) => Some(*c),
            Fragment::Cluster(s) | Fragment::Diphthong(s) => s.chars().next(),
        }
    }

    /// Last character of the fragment's text.
    pub fn last_char(&self) -> Option<char> {
        match self {
            Fragment::Consonant(c) | Fragment::Vowel(c) => Some(*c),
            Fragment::Cluster(s) | Fragment::Diphthong(s) => s.chars().next_back(),
        }
    }

    /// The fragment's text as an owned string.
    pub fn text(&self) -> String {
        match self {
            Fragment::Consonant(c) | Fragment::Vowel(c) => c.to_string(),
            Fragment::Cluster(s) | Fragment::Diphthong(s) => s.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fragmentation
// ---------------------------------------------------------------------------

/// True for characters that join a vowel run.
pub(crate) fn is_vowel_class(c: char) -> bool {
    c == '\'' || character::is_vowel(c)
}

/// Split a root into its alternating consonant and vowel fragments.
///
/// The concatenation of the fragments' texts reproduces the root, and
/// consecutive fragments never share a kind class.
pub fn fragment_root(root: &str) -> Vec<Fragment> {
    let chars: Vec<char> = root.chars().collect();
    let mut fragments = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let vowel_run = is_vowel_class(chars[i]);
        let mut j = i + 1;
        while j < chars.len() && is_vowel_class(chars[j]) == vowel_run {
            j += 1;
        }
        let run = &chars[i..j];
        let frag = match (vowel_run, run.len()) {
            (true, 1) => Fragment::Vowel(run[0]),
            (true, _) => Fragment::Diphthong(run.iter().collect()),
            (false, 1) => Fragment::Consonant(run[0]),
            (false, _) => Fragment::Cluster(run.iter().collect()),
        };
        fragments.push(frag);
        i = j;
    }
    fragments
}
