//! Bag-of-words vectorization.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// English stop words used when building a topic vocabulary.
///
/// This list is larger than the pipeline's stop word list and is applied
/// independently of it.
pub const VECTORIZER_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

static VECTORIZER_STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VECTORIZER_STOP_WORDS.iter().copied().collect());

static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w\w+\b").unwrap_or_else(|e| panic!("invalid term pattern: {e}"))
});

/// Term counts for a set of documents over a shared vocabulary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentTermMatrix {
    /// Vocabulary terms in lexicographic order.
    pub vocabulary: Vec<String>,
    /// One row per document, one column per vocabulary term.
    pub counts: Vec<Vec<f64>>,
}

impl DocumentTermMatrix {
    pub fn n_documents(&self) -> usize {
        self.counts.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Counts lowercase word terms of two or more characters, skipping stop words.
#[derive(Clone, Debug)]
pub struct CountVectorizer {
    use_stop_words: bool,
}

impl CountVectorizer {
    /// A vectorizer that drops English stop words.
    pub fn new() -> Self {
        CountVectorizer {
            use_stop_words: true,
        }
    }

    /// A vectorizer that keeps every term.
    pub fn without_stop_words() -> Self {
        CountVectorizer {
            use_stop_words: false,
        }
    }

    /// Extract the terms of one document, in order of appearance.
    pub fn terms(&self, document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        TERM_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !self.use_stop_words || !VECTORIZER_STOP_WORD_SET.contains(term))
            .map(str::to_string)
            .collect()
    }

    /// Learn the vocabulary of `documents` and count each term per document.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> DocumentTermMatrix {
        let per_document: Vec<Vec<String>> =
            documents.iter().map(|d| self.terms(d.as_ref())).collect();

        let mut columns: BTreeMap<&str, usize> = BTreeMap::new();
        for term in per_document.iter().flatten() {
            columns.entry(term.as_str()).or_insert(0);
        }
        for (column, slot) in columns.values_mut().enumerate() {
            *slot = column;
        }

        let mut counts = vec![vec![0.0; columns.len()]; per_document.len()];
        for (row, terms) in per_document.iter().enumerate() {
            for term in terms {
                counts[row][columns[term.as_str()]] += 1.0;
            }
        }

        let vocabulary: Vec<String> = columns.keys().map(|t| t.to_string()).collect();
        debug!(
            "vectorized {} documents over {} terms",
            counts.len(),
            vocabulary.len()
        );

        DocumentTermMatrix { vocabulary, counts }
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
