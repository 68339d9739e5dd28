use egui::Vec2;

use crate::ghost::{GhostShape, Illustration};

/// One puzzle entry in the fixed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub encouragement: &'static str,
    pub hint: &'static str,
    pub illustration: Illustration,
}

impl Prompt {
    pub fn ghost(&self, size: Vec2) -> Vec<GhostShape> {
        self.illustration.shapes(size)
    }
}

pub static PROMPTS: [Prompt; 5] = [
    Prompt {
        title: "Sunny Smiles",
        encouragement: "Can you make the sun shine bright with happy rays?",
        hint: "Draw a big circle. Add little lines all around to make the sunbeams!",
        illustration: Illustration::Sun,
    },
    Prompt {
        title: "Rocket Adventure",
        encouragement: "Help the rocket zoom to the stars!",
        hint: "Start with a tall triangle, add a rectangle body, and fiery zig-zags at the bottom.",
        illustration: Illustration::Rocket,
    },
    Prompt {
        title: "Friendly Dinosaur",
        encouragement: "This dino loves leafy snacks. Give it a big smile!",
        hint: "Begin with a long oval body, add a bumpy tail, and tiny triangles for plates.",
        illustration: Illustration::Dinosaur,
    },
    Prompt {
        title: "Cozy House",
        encouragement: "Someone wants to live here! Draw doors, windows, and maybe a chimney.",
        hint: "Make a square for the house, a triangle roof, then add your favorite decorations.",
        illustration: Illustration::House,
    },
    Prompt {
        title: "Rainbow Dragon",
        encouragement: "Give the dragon colorful scales and a twirly tail!",
        hint: "Curve a long body, add wings, and top it off with bright rainbow spots.",
        illustration: Illustration::Dragon,
    },
];

pub fn prompt_count() -> usize {
    PROMPTS.len()
}

/// Prompt at `index`, wrapping past the end of the rotation.
pub fn prompt(index: usize) -> &'static Prompt {
    &PROMPTS[index % PROMPTS.len()]
}
