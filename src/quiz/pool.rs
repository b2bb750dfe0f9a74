use std::collections::HashMap;

use rand::Rng;
use rand::rngs::SmallRng;

/// Token lists for the question currently on screen.
///
/// `available` holds the bank tokens not yet placed, in shuffled order.
/// `selected` holds the placed tokens, in placement order. The canonical
/// bank on the question itself is never touched.
#[derive(Clone, Debug, Default)]
pub struct TokenPool {
    available: Vec<String>,
    selected: Vec<String>,
}

/// Fisher-Yates: walk the tail toward the head, swapping each position with
/// a uniformly drawn index at or below it.
pub fn shuffle(tokens: &mut [String], rng: &mut SmallRng) {
    for i in (1..tokens.len()).rev() {
        let j = rng.gen_range(0..=i);
        tokens.swap(i, j);
    }
}

impl TokenPool {
    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Clear the selection and reshuffle the full bank.
    pub fn reset(&mut self, bank: &[String], rng: &mut SmallRng) {
        self.selected.clear();
        self.available = bank.to_vec();
        shuffle(&mut self.available, rng);
    }

    /// Rebuild the pool from a previously saved answer: the saved tokens
    /// become the selection and the unplaced remainder of the bank is
    /// reshuffled.
    pub fn restore(&mut self, bank: &[String], saved: &[String], rng: &mut SmallRng) {
        self.selected = saved.to_vec();
        self.available = remaining_tokens(bank, saved);
        shuffle(&mut self.available, rng);
    }

    /// Move the token at `index` in the available list to the end of the
    /// selection. A stale index is a caller bug; it leaves both lists
    /// untouched and returns false.
    pub fn select(&mut self, index: usize) -> bool {
        debug_assert!(
            index < self.available.len(),
            "select index {index} out of range"
        );
        if index >= self.available.len() {
            return false;
        }
        let token = self.available.remove(index);
        self.selected.push(token);
        true
    }

    /// Move the token at `index` in the selection back to the bank. The
    /// token re-enters at the tail of the available list, not at its
    /// original shuffled position.
    pub fn remove(&mut self, index: usize) -> bool {
        debug_assert!(
            index < self.selected.len(),
            "remove index {index} out of range"
        );
        if index >= self.selected.len() {
            return false;
        }
        let token = self.selected.remove(index);
        self.available.push(token);
        true
    }
}

/// Bank minus the placed tokens, counted per occurrence so a bank with
/// duplicate tokens keeps the copies that are still unplaced.
fn remaining_tokens(bank: &[String], placed: &[String]) -> Vec<String> {
    let mut placed_counts: HashMap<&str, usize> = HashMap::new();
    for token in placed {
        *placed_counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut remaining = Vec::with_capacity(bank.len().saturating_sub(placed.len()));
    for token in bank {
        match placed_counts.get_mut(token.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => remaining.push(token.clone()),
        }
    }
    remaining
}
