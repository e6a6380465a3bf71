//! Static word catalog for username generation
//!
//! Themed base-word lists plus the shared prefix/suffix pools and the
//! visually-ambiguous character set. Fixed at build time, read-only at
//! runtime.

use crate::types::Category;

pub const FRUIT_WORDS: &[&str] = &[
    "Berry", "Peach", "Cherry", "Mango", "Citrus", "Melon", "Apple", "Plum", "Kiwi", "Grape",
    "Lime", "Coco", "Papaya", "Guava", "Lychee", "Fig", "Pear", "Apricot", "Pine", "Orange",
    "Banana", "Nectar", "Pomelo", "Raspberry", "Blueberry", "Straw", "Yuzu", "Dragonfruit",
    "Passion", "Cantaloupe", "Tangerine", "Mandarin", "Pomegranate", "Mulberry", "Cranberry",
    "Goji", "Date", "Jackfruit", "Starfruit",
];

pub const CAT_WORDS: &[&str] = &[
    "Tabby", "Whiskers", "Paws", "Meow", "Feline", "Calico", "Luna", "Simba", "Misty", "Shadow",
    "Oliver", "Mochi", "Nimbus", "Beans", "Purr", "Snowball", "Tiger", "Ash", "Smokey", "Nori",
    "Biscuit", "Pebble", "Mittens", "Pumpkin", "Salem", "Clover", "Tofu", "Sushi", "Button",
    "Marble", "Velvet", "Pixel", "Sprout", "Cinnamon", "Honey", "Latte", "Pudding", "Waffles",
    "Cloud", "Pebbles",
];

pub const ANIME_WORDS: &[&str] = &[
    "Sakura", "Shinobi", "Kaiju", "Senpai", "Chibi", "Hokage", "Manga", "Akira", "Zen", "Ronin",
    "Kage", "Neko", "Yami", "Hoshi", "Kitsune", "Otaku", "Sensei", "Shiro", "Kuro", "Raiden",
    "Ikari", "Sora", "Tenshi", "Kami", "Ryu", "Aoi", "Hina", "Miko", "Kohana", "Arashi", "Tsuki",
    "Yuki", "Hajime", "Izanami", "Izanagi", "Amaterasu", "Susanoo",
];

pub const LEAGUE_WORDS: &[&str] = &[
    "Nexus", "Ward", "Penta", "Gank", "Baron", "Drake", "Mid", "Solo", "Carry", "Flash", "Inhib",
    "Jungle", "Summoner", "Minion", "Rift", "Elder", "Void", "Toplane", "Botlane", "Smite",
    "Recall", "Crit", "Snowball", "Macro", "Micro", "Skillshot", "Cooldown", "Lethal", "Execute",
    "Splitpush", "Outplay", "Clutch", "Pentakill", "Ace", "Waveclear",
];

pub const GENSHIN_WORDS: &[&str] = &[
    "Paimon", "Mora", "Resin", "Teyvat", "Vision", "Archon", "Anemo", "Geo", "Electro", "Dendro",
    "Hydro", "Pyro", "Adeptus", "Celestia", "Primogem", "Leyline", "Fatui", "Harbinger",
    "Traveler", "Domain", "Burst", "Constellation", "Artifact", "Abyss", "Stella", "Comet",
    "Gnosis", "Fate", "Wish", "Banner", "Ascension", "Talent", "Catalyst", "Polearm", "Sword",
];

pub const SANRIO_WORDS: &[&str] = &[
    "Kitty", "Melody", "Cinna", "Kuromi", "Pompom", "Keroppi", "Badtz", "Gudetama", "Lala",
    "Kiki", "Pochacco", "Tuxedo", "Charmmy", "Milk", "BerryBear", "Maron", "WishMe", "Sugarbunny",
    "TinyStar", "Cloudy", "Dreamy", "Softie", "Sweetie", "Fluffy", "Sparkle", "Pastel", "Ribbon",
    "Bubble", "Honeybun", "Cotton", "Marshmallow",
];

pub const CLEAN_WORDS: &[&str] = &[
    "Swift", "Silent", "Echo", "Frost", "Lunar", "Solar", "Void", "Nova", "Pulse", "Aura",
    "Zenith", "Flux", "Pure", "Clear", "Calm", "Sharp", "Focus", "Prime", "Vector", "Orbit",
    "Signal", "Core", "Halo", "Alpha", "Beta", "Vertex", "Linear", "Minimal", "Neutral", "Mono",
    "Crisp", "Still", "Balance", "Edge", "Point", "Axis",
];

pub const MISCELLANEOUS_WORDS: &[&str] = &[
    "Spark", "Glitch", "Neon", "Wave", "Pixel", "Cloud", "Spirit", "Vibe", "Charm", "Glow",
    "Mist", "Drift", "Orbit", "Static", "Dream", "Cosmic", "Bloom", "Phantom", "Ripple", "Arc",
    "Fade", "Motion", "Breeze", "Ember", "Twilight", "Echoes", "Pulse", "Horizon", "Lumen",
    "Novae", "Mirage", "Signal", "Fluxion", "Afterglow",
];

/// Prefix pool shared across all categories
pub const PREFIXES: &[&str] = &[
    "The", "Little", "Big", "Super", "Mega", "Hyper", "Ultra", "Neon", "Dark", "Golden", "Icy",
    "Fire", "Soft", "Tiny", "Cosmic", "Cyber", "Lucky", "Hidden", "Pure", "Lazy", "Silent",
    "Midnight", "Crystal", "Electric", "Frosty", "Sunny", "Gentle",
];

/// Suffix pool shared across all categories
pub const SUFFIXES: &[&str] = &[
    "Zone", "Labs", "Hub", "HQ", "Pro", "Elite", "Master", "Lord", "King", "Queen", "Star",
    "Moon", "Core", "X", "Prime", "Plus", "Nova", "Void", "Wave", "Verse", "Realm", "Craft",
    "Point", "Base", "Nest", "Club", "World",
];

/// Characters that are easy to misread in a username
pub const AMBIGUOUS_CHARS: &[char] = &['l', '1', 'I', 'O', '0', 'S', '5', 'Z', '2'];

/// Characters used to pad a too-short name up to the minimum length
pub const PADDING_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Base words for a category
pub fn words_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Clean => CLEAN_WORDS,
        Category::Fruit => FRUIT_WORDS,
        Category::Cat => CAT_WORDS,
        Category::Anime => ANIME_WORDS,
        Category::League => LEAGUE_WORDS,
        Category::Genshin => GENSHIN_WORDS,
        Category::Sanrio => SANRIO_WORDS,
        Category::Miscellaneous => MISCELLANEOUS_WORDS,
    }
}

/// Check whether a character is in the ambiguous set
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARS.contains(&c)
}

/// Substitute for an ambiguous character.
///
/// Letters fold to their opposite case (the other case of the same letter is
/// outside the ambiguous set); digits shift to a visually distinct digit.
/// Non-ambiguous characters pass through unchanged.
pub fn replacement_for(c: char) -> char {
    match c {
        'l' => 'L',
        'I' => 'i',
        'O' => 'o',
        'S' => 's',
        'Z' => 'z',
        '1' => '7',
        '0' => '9',
        '5' => '4',
        '2' => '3',
        other => other,
    }
}

/// Replace every ambiguous character in `input`
pub fn scrub_ambiguous(input: &str) -> String {
    input.chars().map(replacement_for).collect()
}
