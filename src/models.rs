use serde::{Deserialize, Serialize};

/// Payload for `/newmovie`, echoed back to the client on success.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,
}

impl NewMovie {
    // Presence gate: empty strings and a zero year count as missing.
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty()
            && !self.director.is_empty()
            && self.release_year != 0
            && !self.genre.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct MovieRef {
    pub movie_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct RatingUpsert {
    pub movie_id: i32,
    pub rating: f64,
}
