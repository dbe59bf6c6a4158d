/// One story round: text accumulated for a single `/get_story` request.
///
/// The id is stamped on the story command and echoed back on every chunk,
/// so chunks from a superseded cycle can be recognized and dropped instead
/// of interleaving with the current one.
#[derive(Debug)]
pub struct StoryCycle {
    pub id: u64,
    text: String,
}

impl StoryCycle {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }

    pub fn append(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_in_order() {
        let mut cycle = StoryCycle::new(1);
        cycle.append("You enter a ");
        cycle.append("dark cave.\n");
        assert_eq!(cycle.text(), "You enter a dark cave.\n");
    }
}
