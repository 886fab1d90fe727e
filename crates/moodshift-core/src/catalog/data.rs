//! Curated catalog shipped with the application.

use crate::tags::{GameType, Mood, Platform, SessionLength};

use super::model::CatalogEntry;

struct Seed {
    id: &'static str,
    name: &'static str,
    game_type: GameType,
    mood: Mood,
    length: SessionLength,
    platform: Platform,
    url: &'static str,
    alternate_url: Option<&'static str>,
    description: &'static str,
}

impl Seed {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id.to_string(),
            name: self.name.to_string(),
            game_type: self.game_type,
            mood_tag: self.mood,
            session_length: self.length,
            platform: self.platform,
            primary_url: self.url.to_string(),
            alternate_url: self.alternate_url.map(str::to_string),
            active: true,
            description: self.description.to_string(),
        }
    }
}

/// Mobile titles first, then web, in the order they are recommended.
const SEEDS: &[Seed] = &[
    Seed {
        id: "m-f1",
        name: "Minecraft",
        game_type: GameType::Owned,
        mood: Mood::Relaxed,
        length: SessionLength::Long,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.mojang.minecraftpe",
        alternate_url: Some("https://apps.apple.com/us/app/minecraft/id479516143"),
        description: "The best-selling game of all time. Build, explore, and relax in a blocky infinite world.",
    },
    Seed {
        id: "m-f2",
        name: "Stardew Valley",
        game_type: GameType::Owned,
        mood: Mood::Relaxed,
        length: SessionLength::Long,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.chucklefish.stardewvalley",
        alternate_url: Some("https://apps.apple.com/us/app/stardew-valley/id1406710800"),
        description: "The gold standard of farming sims. Escape to the country for a truly peaceful break.",
    },
    Seed {
        id: "m-f3",
        name: "Candy Crush Saga",
        game_type: GameType::Suggested,
        mood: Mood::Tired,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.king.candycrushsaga",
        alternate_url: Some("https://apps.apple.com/us/app/candy-crush-saga/id553834731"),
        description: "A global phenomenon. Perfect for a low-energy, colorful \"brain-off\" moment.",
    },
    Seed {
        id: "m-f4",
        name: "8 Ball Pool",
        game_type: GameType::Suggested,
        mood: Mood::Bored,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.miniclip.eightballpool",
        alternate_url: Some("https://apps.apple.com/us/app/8-ball-pool/id543186831"),
        description: "The world's #1 pool game. Quick, satisfying, and played by millions.",
    },
    Seed {
        id: "m-f5",
        name: "Clash Royale",
        game_type: GameType::Owned,
        mood: Mood::Competitive,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.supercell.clashroyale",
        alternate_url: Some("https://apps.apple.com/us/app/clash-royale/id1053012308"),
        description: "Fast-paced real-time strategy. 3 minutes of pure competitive focus.",
    },
    Seed {
        id: "m-f6",
        name: "Subway Surfers",
        game_type: GameType::Suggested,
        mood: Mood::Tired,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.kiloo.subwaysurf",
        alternate_url: Some("https://apps.apple.com/us/app/subway-surfers/id512939461"),
        description: "The most downloaded game of the decade. Simple, endless, and iconic.",
    },
    Seed {
        id: "m-f7",
        name: "Genshin Impact",
        game_type: GameType::Suggested,
        mood: Mood::Relaxed,
        length: SessionLength::Long,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.miHoYo.GenshinImpact",
        alternate_url: Some("https://apps.apple.com/us/app/genshin-impact/id1517783697"),
        description: "A massive, beautiful open world that redefined what mobile games can be.",
    },
    Seed {
        id: "m-f8",
        name: "Among Us",
        game_type: GameType::Owned,
        mood: Mood::Bored,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.innersloth.spacemafia",
        alternate_url: Some("https://apps.apple.com/us/app/among-us/id1351168404"),
        description: "The ultimate social deduction game. Find the imposter during your lunch break.",
    },
    Seed {
        id: "m-f9",
        name: "PUBG Mobile",
        game_type: GameType::Owned,
        mood: Mood::Competitive,
        length: SessionLength::Long,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.tencent.ig",
        alternate_url: Some("https://apps.apple.com/us/app/pubg-mobile/id1330123889"),
        description: "The battle royale pioneer. Intense, tactical, and globally massive.",
    },
    Seed {
        id: "m-f10",
        name: "Call of Duty: Mobile",
        game_type: GameType::Owned,
        mood: Mood::Competitive,
        length: SessionLength::Medium,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.activision.callofduty.shooter",
        alternate_url: Some("https://apps.apple.com/us/app/call-of-duty-mobile/id1452737512"),
        description: "Console-quality FPS action on the go. High-octane and high-skill.",
    },
    Seed {
        id: "m-f11",
        name: "Vampire Survivors",
        game_type: GameType::Owned,
        mood: Mood::Stressed,
        length: SessionLength::Medium,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.poncle.vampiresurvivors",
        alternate_url: Some("https://apps.apple.com/us/app/vampire-survivors/id6443378516"),
        description: "A frantic \"bullet heaven\" hit. Hypnotic gameplay to vent your stress.",
    },
    Seed {
        id: "m-f12",
        name: "Monument Valley",
        game_type: GameType::Suggested,
        mood: Mood::Relaxed,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.ustwo.monumentvalley",
        alternate_url: Some("https://apps.apple.com/us/app/monument-valley/id728293409"),
        description: "A mind-bending architectural puzzle. Short, poetic, and stunningly beautiful.",
    },
    Seed {
        id: "m-f13",
        name: "Jetpack Joyride",
        game_type: GameType::Suggested,
        mood: Mood::Tired,
        length: SessionLength::Short,
        platform: Platform::Mobile,
        url: "https://play.google.com/store/apps/details?id=com.halfbrick.jetpackjoyride",
        alternate_url: Some("https://apps.apple.com/us/app/jetpack-joyride/id457446971"),
        description: "An old-school mobile classic. Fast, funny, and perfect for tired minds.",
    },
    Seed {
        id: "w-f1",
        name: "Hades",
        game_type: GameType::Owned,
        mood: Mood::Competitive,
        length: SessionLength::Medium,
        platform: Platform::Web,
        url: "https://www.supergiantgames.com/games/hades/",
        alternate_url: None,
        description: "A masterpiece of the decade. Escape the underworld in this god-like rogue-like.",
    },
    Seed {
        id: "w-f2",
        name: "Elden Ring",
        game_type: GameType::Owned,
        mood: Mood::Stressed,
        length: SessionLength::Long,
        platform: Platform::Web,
        url: "https://www.bandainamcoent.com/games/elden-ring",
        alternate_url: None,
        description: "Game of the Year 2022. Challenging, rewarding, and incredibly vast.",
    },
    Seed {
        id: "w-f3",
        name: "Wordle",
        game_type: GameType::Suggested,
        mood: Mood::Tired,
        length: SessionLength::Short,
        platform: Platform::Web,
        url: "https://www.nytimes.com/games/wordle/index.html",
        alternate_url: None,
        description: "The simple word game that took over the internet. A perfect 5-minute break.",
    },
    Seed {
        id: "w-f4",
        name: "Slay the Spire",
        game_type: GameType::Owned,
        mood: Mood::Anxious,
        length: SessionLength::Medium,
        platform: Platform::Web,
        url: "https://www.megacrit.com/",
        alternate_url: None,
        description: "The definitive deck-builder. Strategic, calm, but deeply engaging.",
    },
    Seed {
        id: "w-f5",
        name: "Balatro",
        game_type: GameType::Owned,
        mood: Mood::Bored,
        length: SessionLength::Medium,
        platform: Platform::Web,
        url: "https://www.playbalatro.com/",
        alternate_url: None,
        description: "The poker-themed sensation. Addictive logic puzzles for a focused break.",
    },
    Seed {
        id: "w-f6",
        name: "Disco Elysium",
        game_type: GameType::Suggested,
        mood: Mood::Bored,
        length: SessionLength::Long,
        platform: Platform::Web,
        url: "https://discoelysium.com/",
        alternate_url: None,
        description: "A groundbreaking RPG. Deeply philosophical and unlike anything else.",
    },
    Seed {
        id: "w-f7",
        name: "Tetr.io",
        game_type: GameType::Owned,
        mood: Mood::Competitive,
        length: SessionLength::Short,
        platform: Platform::Web,
        url: "https://tetr.io/",
        alternate_url: None,
        description: "Modern, high-speed competitive Tetris. The ultimate focus test.",
    },
    Seed {
        id: "w-f8",
        name: "GeoGuessr",
        game_type: GameType::Suggested,
        mood: Mood::Bored,
        length: SessionLength::Medium,
        platform: Platform::Web,
        url: "https://www.geoguessr.com/",
        alternate_url: None,
        description: "Explore the world from your chair. A global favorite for curious minds.",
    },
    Seed {
        id: "w-f9",
        name: "Celeste",
        game_type: GameType::Owned,
        mood: Mood::Stressed,
        length: SessionLength::Medium,
        platform: Platform::Web,
        url: "https://www.celestegame.com/",
        alternate_url: None,
        description: "A legendary platformer about overcoming challenges and mental health.",
    },
    Seed {
        id: "w-f10",
        name: "Townscaper",
        game_type: GameType::Suggested,
        mood: Mood::Relaxed,
        length: SessionLength::Short,
        platform: Platform::Web,
        url: "https://oskarstalberg.com/Townscaper/",
        alternate_url: None,
        description: "Pure relaxation. Click to build colorful little towns in the sea.",
    },
];

pub(super) fn builtin_entries() -> Vec<CatalogEntry> {
    SEEDS.iter().map(Seed::to_entry).collect()
}
