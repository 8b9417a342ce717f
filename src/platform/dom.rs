//! DOM-backed score/lives readouts

use web_sys::{Document, Element};

use super::ScoreDisplay;

/// Writes `Score: n` / `Lives: n` into `#score` and `#lives`
pub struct DomScoreboard {
    score: Option<Element>,
    lives: Option<Element>,
}

impl DomScoreboard {
    pub fn new(document: &Document) -> Self {
        let score = document.get_element_by_id("score");
        let lives = document.get_element_by_id("lives");
        if score.is_none() || lives.is_none() {
            log::warn!("Score/lives elements missing - readouts disabled");
        }
        Self { score, lives }
    }
}

impl ScoreDisplay for DomScoreboard {
    fn set_score(&mut self, score: u32) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&format!("Score: {}", score)));
        }
    }

    fn set_lives(&mut self, lives: i32) {
        if let Some(el) = &self.lives {
            el.set_text_content(Some(&format!("Lives: {}", lives)));
        }
    }
}
