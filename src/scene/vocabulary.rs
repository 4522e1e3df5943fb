//! Shared word lists used to build the extraction patterns.
//!
//! Multi-word alternatives come before their single-word prefixes so the
//! leftmost-first regex engine prefers the longer phrase.

/// Posture verbs, in the order they are tried.
pub(crate) const POSTURES: &str = "sitting|standing|kneeling|lying|leaning|walking|lounging|reclining|perched|crouching|squatting|stretching|posing|seated|curled up|strolling|dancing|twirling";

/// Adjectives that open a descriptive location phrase.
pub(crate) const LOCATION_ADJECTIVES: &str = "industrial|modern|minimalist|minimal|cozy|cosy|luxurious|luxury|rustic|bright|sunlit|sun-drenched|light-filled|elegant|spacious|chic|scandinavian|parisian|contemporary|airy|charming|vintage|boho|bohemian|coastal|urban|sleek|stylish|high-end|upscale|quaint|serene|open-plan|tropical|grand|intimate|converted|historic|beachfront|oceanfront|rooftop|boutique|trendy|quiet|busy|sunny|beautiful|stunning|lush";

/// Place nouns that close a location phrase.
pub(crate) const LOCATION_NOUNS: &str = "living room|dining room|coffee shop|hotel lobby|hotel suite|hotel room|beach club|yoga studio|loft|apartment|bedroom|kitchen|caf[eé]|studio|penthouse|hotel|villa|garden|terrace|balcony|gym|library|boutique|office|street|park|cabin|chalet|spa|bathroom|lounge|restaurant|rooftop|home|house|courtyard|bakery|bar|beach|space|interior|room";

/// Furniture and surfaces the subject can be on or against.
pub(crate) const FURNITURE: &str = "window seat|kitchen island|chaise lounge|sun lounger|yoga mat|sofa|couch|armchair|chair|bed|bench|stool|windowsill|rug|floor|countertop|counter|table|desk|daybed|chaise|ottoman|steps|staircase|railing|vanity|lounger|swing";
