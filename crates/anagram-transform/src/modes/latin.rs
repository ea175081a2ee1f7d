use super::{ReplacementMode, apply_rules};

/// Classical Latin spelling, which did not distinguish i/j, u/v or w/vv.
pub struct LatinMode;

impl LatinMode {
    pub const NAME: &'static str = "LATIN";

    const RULES: &'static [(char, &'static str)] = &[('i', "j"), ('u', "v"), ('w', "vv")];
}

impl ReplacementMode for LatinMode {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn replacements(&self) -> &'static [(char, &'static str)] {
        Self::RULES
    }

    fn transform(&self, input: &str) -> String {
        apply_rules(input, Self::RULES)
    }
}
