use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry of the top movies list. Only `id` is required. Every other field is kept exactly
/// as the source sent it, nulls included, so a movie serializes back to the same object.
///
/// The source's known fields (`rank`, `title`, `fullTitle`, `year`, `image`, `crew`, `imDbRating`,
/// `imDbRatingCount`) are strings; accessors return `None` when one is absent or not a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Movie {
    /// Create a [Movie] with only its identifier and title set.
    pub fn new(id: &str, title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(String::from("title"), Value::from(title));
        Movie {
            id: String::from(id),
            fields,
        }
    }

    pub fn rank(&self) -> Option<&str> {
        self.string_field("rank")
    }

    pub fn title(&self) -> Option<&str> {
        self.string_field("title")
    }

    pub fn full_title(&self) -> Option<&str> {
        self.string_field("fullTitle")
    }

    pub fn year(&self) -> Option<&str> {
        self.string_field("year")
    }

    pub fn image(&self) -> Option<&str> {
        self.string_field("image")
    }

    pub fn crew(&self) -> Option<&str> {
        self.string_field("crew")
    }

    pub fn im_db_rating(&self) -> Option<&str> {
        self.string_field("imDbRating")
    }

    pub fn im_db_rating_count(&self) -> Option<&str> {
        self.string_field("imDbRatingCount")
    }

    /// Any field other than `id`, as sent by the source.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// The document served by the top movie source. Items stay raw until [MovieList::top] decodes
/// the ones that are needed.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MovieList {
    pub items: Vec<Value>,
}

impl MovieList {
    /// Decode the first `count` items, in order. Items further down the list are never looked at.
    pub fn top(&self, count: usize) -> Result<Vec<Movie>, serde_json::Error> {
        self.items
            .iter()
            .take(count)
            .map(|item| Movie::deserialize(item))
            .collect()
    }
}
