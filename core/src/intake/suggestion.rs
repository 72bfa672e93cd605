use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SUGGESTIONS: [&str; 4] = [
    "I need a comprehensive project proposal for a web development initiative that includes modern responsive design, user authentication, and e-commerce functionality.",
    "Create a marketing proposal for a digital transformation strategy that focuses on social media engagement, SEO optimization, and content marketing.",
    "Develop a partnership proposal for a strategic alliance between two technology companies to collaborate on innovative solutions.",
    "Generate a sponsorship proposal for a music festival that highlights brand visibility, audience demographics, and marketing benefits.",
];

/// Uniform draw over `SUGGESTIONS`. Pass a seeded rng for a repeatable pick.
pub fn pick_suggestion<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUGGESTIONS[rng.gen_range(0..SUGGESTIONS.len())]
}

pub fn suggestion_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
