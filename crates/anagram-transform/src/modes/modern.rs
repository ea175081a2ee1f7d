use super::{ReplacementMode, apply_rules};

/// Simplified modern spelling: v → w, s → z, c → k.
pub struct ModernMode;

impl ModernMode {
    pub const NAME: &'static str = "MODERN";

    const RULES: &'static [(char, &'static str)] = &[('v', "w"), ('s', "z"), ('c', "k")];
}

impl ReplacementMode for ModernMode {
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
