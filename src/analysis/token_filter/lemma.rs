//! Lemmatization filter and dictionary.
//!
//! Lemmatization maps inflected words to their dictionary base form using a
//! fixed morphological dictionary. Lookup follows the noun rules of the
//! WordNet morphological processor:
//!
//! 1. If the word has an irregular form entry (`children` → `child`), the
//!    candidates are the word itself and its listed lemmas.
//! 2. Otherwise the candidates are the word itself plus every result of the
//!    suffix substitutions (`-ses` → `-s`, `-ies` → `-y`, `-men` → `-man`, ...).
//! 3. Only candidates found in the dictionary survive; the shortest one wins
//!    (first one on ties). Words with no surviving candidate pass through
//!    unchanged.
//!
//! Lookup is case-sensitive, like the dictionary it is modeled on: `Cats`
//! stays `Cats`, `cats` becomes `cat`.
//!
//! The built-in English dictionary knows about 600 common nouns and a short
//! list of irregular plurals, far fewer than WordNet. Load a fuller word list
//! with [`LemmaDictionary::from_reader`] when coverage matters.
//!
//! # Examples
//!
//! ```
//! use narrative::analysis::token_filter::lemma::LemmaDictionary;
//!
//! let dictionary = LemmaDictionary::english();
//! assert_eq!(dictionary.lemmatize("cities"), "city");
//! assert_eq!(dictionary.lemmatize("children"), "child");
//! assert_eq!(dictionary.lemmatize("running"), "running");
//! ```

use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{NarrativeError, Result};

/// Noun suffix substitutions, tried in this order.
const NOUN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Irregular noun forms and their lemmas.
const ENGLISH_IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("appendices", "appendix"),
    ("bacteria", "bacterium"),
    ("cacti", "cactus"),
    ("calves", "calf"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("curricula", "curriculum"),
    ("data", "datum"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("halves", "half"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("media", "medium"),
    ("mice", "mouse"),
    ("nuclei", "nucleus"),
    ("oxen", "ox"),
    ("phenomena", "phenomenon"),
    ("radii", "radius"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("stimuli", "stimulus"),
    ("syllabi", "syllabus"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("wolves", "wolf"),
];

/// Base forms known to the default English dictionary.
const ENGLISH_BASE_FORMS: &[&str] = &[
    "ability", "access", "account", "act", "action", "activity", "address", "adult", "advice",
    "age", "agency", "agent", "agreement", "air", "algorithm", "amount", "analysis", "animal",
    "answer", "apple", "application", "approach", "area", "argument", "arm", "army", "art",
    "article", "artist", "aspect", "attack", "attention", "audience", "author", "authority",
    "baby", "back", "bag", "ball", "bank", "bar", "base", "basis", "battery", "battle", "beach",
    "bear", "bed", "benefit", "bill", "bird", "birth", "blood", "board", "boat", "body", "bone",
    "book", "border", "boss", "box", "boy", "brain", "branch", "bread", "breath", "bridge",
    "brother", "budget", "building", "bus", "bush", "business", "buyer", "cake", "call",
    "camera", "campaign", "cancer", "candidate", "capital", "car", "card", "care", "career",
    "case", "cat", "category", "cause", "cell", "center", "century", "chain", "chair",
    "challenge", "chance", "change", "chapter", "character", "charge", "chart", "check",
    "chicken", "child", "choice", "church", "circle", "citizen", "city", "claim", "class",
    "client", "climate", "clock", "cloud", "club", "coach", "coast", "code", "coffee", "college",
    "color", "column", "comment", "community", "company", "computer", "concept", "concern",
    "condition", "conference", "conflict", "context", "contract", "control", "cost", "country",
    "county", "couple", "course", "court", "cover", "crash", "crime", "crisis", "culture", "cup",
    "customer", "cycle", "dad", "damage", "danger", "data", "date", "daughter", "day", "deal",
    "death", "debate", "decade", "decision", "degree", "demand", "design", "detail", "device",
    "difference", "dinner", "direction", "director", "discussion", "disease", "dish", "doctor",
    "document", "dog", "dollar", "door", "dream", "dress", "drink", "driver", "drug", "duty",
    "ear", "earth", "economy", "edge", "editor", "education", "effect", "effort", "egg",
    "election", "employee", "end", "enemy", "energy", "engine", "engineer", "environment",
    "error", "event", "evidence", "example", "exercise", "experience", "expert", "eye", "face",
    "fact", "factor", "failure", "family", "fan", "farm", "father", "fault", "fear", "feature",
    "fee", "feeling", "field", "fight", "figure", "file", "film", "finger", "fire", "firm",
    "fish", "flight", "floor", "flower", "focus", "food", "foot", "force", "forest", "form",
    "friend", "fruit", "fund", "future", "game", "garden", "gas", "gene", "girl", "glass",
    "goal", "god", "government", "grade", "group", "growth", "guest", "gun", "guy", "hair",
    "half", "hall", "hand", "head", "health", "heart", "heat", "hero", "history", "hole", "home",
    "hope", "horse", "hospital", "hotel", "hour", "house", "husband", "idea", "image", "impact",
    "income", "index", "industry", "information", "injury", "insight", "instance", "interest",
    "interview", "investment", "island", "issue", "item", "job", "journey", "judge", "key",
    "kid", "kind", "kitchen", "knife", "knowledge", "lab", "lady", "lake", "land", "language",
    "law", "lawyer", "layer", "leader", "leaf", "lesson", "letter", "level", "library", "life",
    "light", "limit", "line", "link", "list", "loss", "love", "machine", "magazine", "man",
    "manager", "map", "market", "match", "matrix", "meal", "meaning", "measure", "meeting",
    "member", "memory", "message", "method", "metric", "middle", "mind", "minute", "mission",
    "model", "moment", "money", "month", "morning", "mother", "mountain", "mouse", "mouth",
    "movie", "music", "name", "nation", "nature", "need", "network", "news", "newspaper",
    "night", "node", "note", "number", "object", "office", "officer", "oil", "opinion",
    "opportunity", "option", "order", "organization", "outcome", "owner", "page", "pain",
    "paper", "parent", "park", "part", "partner", "party", "patient", "pattern", "payment",
    "peace", "people", "period", "person", "phone", "photo", "phrase", "picture", "piece",
    "place", "plan", "plane", "plant", "player", "point", "police", "policy", "pool",
    "population", "position", "power", "practice", "president", "pressure", "price", "problem",
    "process", "product", "profession", "professor", "program", "project", "property",
    "proposal", "purpose", "quality", "question", "race", "radio", "rate", "reader", "reason",
    "record", "region", "relationship", "report", "research", "resource", "response", "result",
    "review", "right", "risk", "river", "road", "rock", "role", "room", "rule", "safety",
    "sale", "sample", "scene", "school", "science", "scientist", "score", "screen", "sea",
    "season", "seat", "second", "section", "sector", "security", "self", "sense", "sentence",
    "series", "service", "session", "shape", "share", "shelf", "ship", "shoe", "shop",
    "sign", "signal", "sister", "site", "situation", "size", "skill", "skin", "society",
    "software", "soldier", "solution", "son", "song", "sound", "source", "space", "speaker",
    "species", "speech", "sport", "staff", "stage", "star", "state", "statement", "station",
    "step", "stock", "stone", "store", "story", "strategy", "street", "structure", "student",
    "study", "style", "subject", "success", "summary", "summer", "support", "surface",
    "system", "table", "task", "tax", "teacher", "team", "technology", "television",
    "term", "test", "text", "theory", "thing", "thought", "threat", "time", "title", "tool",
    "tooth", "topic", "town", "trade", "training", "tree", "trial", "trip", "trouble", "truth",
    "type", "unit", "university", "user", "value", "version", "victim", "video", "view",
    "village", "voice", "vote", "wall", "war", "watch", "water", "wave", "way", "weapon",
    "week", "weight", "wife", "window", "winter", "wish", "wolf", "woman", "word", "work",
    "worker", "world", "writer", "year", "youth", "zone",
];

static ENGLISH_DICTIONARY: LazyLock<Arc<LemmaDictionary>> = LazyLock::new(|| {
    Arc::new(LemmaDictionary::from_entries(
        ENGLISH_BASE_FORMS.iter().copied(),
        ENGLISH_IRREGULAR_FORMS.iter().copied(),
    ))
});

/// A morphological dictionary: known base forms plus irregular forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LemmaDictionary {
    base_forms: HashSet<String>,
    irregular: HashMap<String, Vec<String>>,
}

impl LemmaDictionary {
    /// The built-in English dictionary, initialized once and shared.
    pub fn english() -> Arc<LemmaDictionary> {
        Arc::clone(&ENGLISH_DICTIONARY)
    }

    /// Build a dictionary from base forms and `(inflected, lemma)` pairs.
    ///
    /// Every irregular lemma is also registered as a base form.
    pub fn from_entries<B, I, S, T>(base_forms: B, irregular: I) -> Self
    where
        B: IntoIterator<Item = S>,
        I: IntoIterator<Item = (T, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut dictionary = LemmaDictionary {
            base_forms: base_forms.into_iter().map(Into::into).collect(),
            irregular: HashMap::new(),
        };
        for (form, lemma) in irregular {
            dictionary.add_irregular(form, lemma);
        }
        dictionary
    }

    /// Load a dictionary from a line-oriented reader.
    ///
    /// Each non-empty line not starting with `#` is either a single base form
    /// (`child`) or an inflected form followed by its lemma (`children child`).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = LemmaDictionary::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [base] => {
                    dictionary.base_forms.insert((*base).to_string());
                }
                [form, lemma] => dictionary.add_irregular(*form, *lemma),
                _ => {
                    return Err(NarrativeError::config(format!(
                        "lemma dictionary line {} has {} fields, expected 1 or 2",
                        line_num + 1,
                        fields.len()
                    )));
                }
            }
        }

        Ok(dictionary)
    }

    fn add_irregular<T: Into<String>>(&mut self, form: T, lemma: T) {
        let lemma = lemma.into();
        self.base_forms.insert(lemma.clone());
        self.irregular.entry(form.into()).or_default().push(lemma);
    }

    /// Check if `word` is a known base form.
    pub fn contains(&self, word: &str) -> bool {
        self.base_forms.contains(word)
    }

    /// Number of known base forms.
    pub fn len(&self) -> usize {
        self.base_forms.len()
    }

    /// Check if the dictionary knows no base forms.
    pub fn is_empty(&self) -> bool {
        self.base_forms.is_empty()
    }

    /// Map `word` to its base form, or return it unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        let mut candidates: Vec<String> = vec![word.to_string()];
        match self.irregular.get(word) {
            Some(lemmas) => candidates.extend(lemmas.iter().cloned()),
            None => candidates.extend(NOUN_SUBSTITUTIONS.iter().filter_map(
                |(suffix, replacement)| {
                    word.strip_suffix(suffix)
                        .map(|stem| format!("{stem}{replacement}"))
                },
            )),
        }

        candidates
            .into_iter()
            .filter(|candidate| self.contains(candidate))
            .reduce(|best, candidate| {
                if candidate.chars().count() < best.chars().count() {
                    candidate
                } else {
                    best
                }
            })
            .unwrap_or_else(|| word.to_string())
    }
}

/// Filter that lemmatizes every token with a shared dictionary.
#[derive(Clone, Debug)]
pub struct LemmaFilter {
    dictionary: Arc<LemmaDictionary>,
}

impl LemmaFilter {
    /// Create a lemma filter over the built-in English dictionary.
    pub fn new() -> Self {
        Self::with_dictionary(LemmaDictionary::english())
    }

    /// Create a lemma filter over a custom dictionary.
    pub fn with_dictionary(dictionary: Arc<LemmaDictionary>) -> Self {
        LemmaFilter { dictionary }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let lemmatized = tokens
            .map(|token| {
                let lemma = self.dictionary.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Box::new(lemmatized.into_iter())
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
