//! The fixed Gen-1 roster and completion math.

/// The 151 Gen-1 creature names in National Dex order.
pub const GEN1_ROSTER: [&str; 151] = [
    "Bulbasaur", "Ivysaur", "Venusaur", "Charmander", "Charmeleon", "Charizard",
    "Squirtle", "Wartortle", "Blastoise", "Caterpie", "Metapod", "Butterfree",
    "Weedle", "Kakuna", "Beedrill", "Pidgey", "Pidgeotto", "Pidgeot",
    "Rattata", "Raticate", "Spearow", "Fearow", "Ekans", "Arbok",
    "Pikachu", "Raichu", "Sandshrew", "Sandslash", "Nidoran♀", "Nidorina",
    "Nidoqueen", "Nidoran♂", "Nidorino", "Nidoking", "Clefairy", "Clefable",
    "Vulpix", "Ninetales", "Jigglypuff", "Wigglytuff", "Zubat", "Golbat",
    "Oddish", "Gloom", "Vileplume", "Paras", "Parasect", "Venonat", "Venomoth",
    "Diglett", "Dugtrio", "Meowth", "Persian", "Psyduck", "Golduck",
    "Mankey", "Primeape", "Growlithe", "Arcanine", "Poliwag", "Poliwhirl",
    "Poliwrath", "Abra", "Kadabra", "Alakazam", "Machop", "Machoke", "Machamp",
    "Bellsprout", "Weepinbell", "Victreebel", "Tentacool", "Tentacruel",
    "Geodude", "Graveler", "Golem", "Ponyta", "Rapidash", "Slowpoke", "Slowbro",
    "Magnemite", "Magneton", "Farfetch'd", "Doduo", "Dodrio", "Seel", "Dewgong",
    "Grimer", "Muk", "Shellder", "Cloyster", "Gastly", "Haunter", "Gengar",
    "Onix", "Drowzee", "Hypno", "Krabby", "Kingler", "Voltorb", "Electrode",
    "Exeggcute", "Exeggutor", "Cubone", "Marowak", "Hitmonlee", "Hitmonchan",
    "Lickitung", "Koffing", "Weezing", "Rhyhorn", "Rhydon", "Chansey",
    "Tangela", "Kangaskhan", "Horsea", "Seadra", "Goldeen", "Seaking",
    "Staryu", "Starmie", "Mr. Mime", "Scyther", "Jynx", "Electabuzz",
    "Magmar", "Pinsir", "Tauros", "Magikarp", "Gyarados", "Lapras", "Ditto",
    "Eevee", "Vaporeon", "Jolteon", "Flareon", "Porygon", "Omanyte", "Omastar",
    "Kabuto", "Kabutops", "Aerodactyl", "Snorlax", "Articuno", "Zapdos",
    "Moltres", "Dratini", "Dragonair", "Dragonite", "Mewtwo", "Mew",
];

/// 1-based National Dex number for a roster name (exact match).
pub fn dex_number(name: &str) -> Option<u16> {
    GEN1_ROSTER
        .iter()
        .position(|&n| n == name)
        .map(|i| (i + 1) as u16)
}

/// Whether a creature name is part of the fixed roster.
pub fn is_known(name: &str) -> bool {
    GEN1_ROSTER.contains(&name)
}

/// Dex completion against the fixed roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    /// Caught names that appear in the roster.
    pub caught: usize,
    pub total: usize,
    /// Roster names not yet caught, in dex order.
    pub missing: Vec<&'static str>,
}

/// Summarize completion for a set of caught creature names.
///
/// Names outside the roster (typos, later generations) don't count
/// toward or against completion.
pub fn completion<'a, I>(caught_names: I) -> CompletionSummary
where
    I: IntoIterator<Item = &'a str>,
{
    let caught: std::collections::HashSet<&str> = caught_names.into_iter().collect();
    let missing: Vec<&'static str> = GEN1_ROSTER
        .iter()
        .copied()
        .filter(|name| !caught.contains(name))
        .collect();
    CompletionSummary {
        caught: GEN1_ROSTER.len() - missing.len(),
        total: GEN1_ROSTER.len(),
        missing,
    }
}
