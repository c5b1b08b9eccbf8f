//! The SEPTA Regional Rail station table and resolver.
//!
//! Rules are checked top to bottom and the first match wins. Several short
//! prefixes sit above longer ones that share their leading letters, which
//! makes some later rules unreachable for some inputs (e.g. `"college"`
//! resolves to Colmar, `"fortwashington"` to Forest Hills). Resolution is
//! defined by this table as written, so the order must not be changed or
//! replaced by a longest-prefix lookup.

use crate::domain::StationName;

use super::alias::{StationAlias, alias, normalize};

/// Station used whenever a fragment matches no rule.
pub const FALLBACK_STATION: &str = "30th Street Station";

/// The ordered matching rules for SEPTA Regional Rail.
static SEPTA_ALIASES: &[StationAlias] = &[
    alias("9th St", &["9st", "9street", "9"], &["9th"]),
    alias("30th Street Station", &["30street", "30st", "30"], &["30th"]),
    alias("49th St", &["49st", "49street", "49"], &["49th"]),
    alias("Airport Terminal A", &["airportterminala", "airporta", "terminala", "terma"], &[]),
    alias("Airport Terminal B", &["airportterminalb", "airportb", "terminalb", "termb"], &[]),
    alias(
        "Airport Terminal C-D",
        &[
            "airportterminalc-d",
            "airportterminalc",
            "airportterminald",
            "airportc",
            "airportd",
            "terminalc",
            "terminald",
            "termd",
            "termc",
        ],
        &[],
    ),
    alias(
        "Airport Terminal E-F",
        &[
            "airportterminale-f",
            "airportterminale",
            "airportterminalf",
            "airporte-f",
            "airporte",
            "airportf",
            "terminale-f",
            "terminale",
            "terminalf",
        ],
        &[],
    ),
    alias("Allegheny", &["allegheny"], &["alleg"]),
    alias("Allen Lane", &["allenlane"], &["alle"]),
    alias("Ambler", &["ambler"], &["am"]),
    alias("Angora", &["angora"], &["an"]),
    alias("Ardmore", &["ardmore"], &["ardm"]),
    alias("Ardsley", &["ardsley"], &["ar"]),
    alias("Bala", &["bala"], &["ba"]),
    alias("Berwyn", &["berwyn"], &["ber"]),
    alias("Bethayres", &["bethayres"], &["bet"]),
    alias("Bridesburg", &["bridesburg"], &["brid"]),
    alias("Bristol", &["bristol"], &["bri"]),
    alias("Bryn Mawr", &["brynmawr"], &["br"]),
    alias("Carpenter", &["carpenter"], &["ca"]),
    alias("Chalfont", &["chalfont"], &["cha"]),
    alias("Chelten Avenue", &["cheltenavenue"], &["cheltena"]),
    alias("Cheltenham", &["cheltenham"], &["chel"]),
    alias("Chester TC", &["chestertransportationcenter"], &["cheste"]),
    alias("Chestnut Hill East", &["chestnuthilleast", "east"], &["chestnuthilleast"]),
    alias("Chestnut Hill West", &["chestnuthillwest", "west"], &["chestnut"]),
    alias("Churchmans Crossing", &["churchmanscrossing,de"], &["chu"]),
    alias("Claymont", &["claymont,de"], &["cla"]),
    alias("Clifton-Aldan", &["clifton-aldan", "aldan"], &["cli"]),
    alias("Colmar", &["colmar"], &["col"]),
    alias("Conshohocken", &["conshohocken"], &["con"]),
    alias("Cornwells Heights", &["cornwellsheights"], &["cor"]),
    alias("Crestmont", &["crestmont"], &["cre"]),
    alias("Croydon", &["croydon"], &["cro"]),
    alias("Crum Lynne", &["crumlynne"], &["cr"]),
    alias("Curtis Park", &["curtispark"], &["cu"]),
    alias("Cynwyd", &["cynwyd"], &["cy"]),
    alias("Daylesford", &["daylesford"], &["day"]),
    alias("Darby", &["darby"], &["da"]),
    alias("Delaware Valley College", &["delawarevalleycollege", "valley", "college"], &["da"]),
    alias("Devon", &["devon"], &["de"]),
    alias("Downingtown", &["downingtown"], &["dow"]),
    alias("Doylestown", &["doylestown"], &["do"]),
    alias("East Falls", &["eastfalls", "falls"], &["eastf"]),
    alias("Eastwick Station", &["eastwick", "wick"], &["ea"]),
    alias("Eddington", &["eddington"], &["eddi"]),
    alias("Eddystone", &["eddystone", "stone"], &["ed"]),
    alias("Elkins Park", &["elkinspark", "park"], &["elk"]),
    alias("Elm St", &["elmstreet-norristown"], &["elm"]),
    alias("Elwyn Station", &["elwyn"], &["el"]),
    alias("Exton", &["exton"], &["ex"]),
    alias("Fern Rock TC", &["fernrocktransportationcenter", "rock"], &["fernr"]),
    alias("Fernwood", &["fernwood-yeadon", "wood", "yeadon"], &["fe"]),
    alias("Folcroft", &["folcroft"], &["fol"]),
    alias("Forest Hills", &["foresthills", "hills"], &["for"]),
    alias("Ft Washington", &["fortwashington", "ft", "Washington"], &["fort"]),
    alias("Fortuna", &["fortuna"], &["for"]),
    alias("Fox Chase", &["foxchase"], &["fo"]),
    alias("Germantown", &["germantown"], &["fe"]),
    alias("Gladstone", &["gladstone"], &["gla"]),
    alias("Glenolden", &["glenolden", "olden"], &["gleno"]),
    alias("Glenside", &["glenside"], &["gl"]),
    alias("Gravers", &["gravers"], &["gr"]),
    alias("Gwynedd Valley", &["gwyneddvalley"], &["gw"]),
    alias("Hatboro", &["hatboro"], &["hat"]),
    alias("Haverford", &["haverford"], &["ha"]),
    alias("Highland Ave", &["highlandavenue"], &["highlandav"]),
    alias("Highland", &["highland"], &["hi"]),
    alias("Holmesburg Jct", &["holmesburgjunction"], &["ho"]),
    alias("Ivy Ridge", &["ivyridge"], &["iv"]),
    alias("Jefferson Station", &["jeffersonstation(formerlymarketeast)"], &["jef"]),
    alias("Jenkintown-Wyncote", &["jenkintown-wyncote"], &["jen"]),
    alias("Langhorne", &["langhorne"], &["lang"]),
    alias("Lansdale", &["lansdale"], &["lansda"]),
    alias("Lansdowne", &["lansdowne"], &["lan"]),
    alias("Lawndale", &["lawndale"], &["la"]),
    alias("Levittown", &["levittown"], &["le"]),
    alias("Link Belt", &["linkbelt"], &["li"]),
    alias("Main St", &["mainstreet-norristown"], &["mai"]),
    alias("Malvern", &["malvern"], &["mal"]),
    alias("Manayunk", &["manayunk"], &["man"]),
    alias("Marcus Hook", &["marcushook"], &["marc"]),
    alias("Market East", &["marketeast(nowjeffersonstation)"], &["ma"]),
    alias("Meadowbrook", &["meadowbrook"], &["mea"]),
    alias("Media", &["media"], &["med"]),
    alias("Melrose Park", &["melrosepark"], &["mel"]),
    alias("Merion", &["merion"], &["mer"]),
    alias("Miquon", &["miquon"], &["mi"]),
    alias("Morton", &["morton"], &["mor"]),
    alias("Moylan-Rose Valley", &["moylan-rosevalley"], &["moy"]),
    alias("Mt Airy", &["mt.airy", "airy"], &["mt"]),
    alias("Narberth", &["narberth"], &["na"]),
    alias("Neshaminy Falls", &["neshaminyfalls"], &["na"]),
    alias("New Britain", &["newbritain", "britain"], &["newb"]),
    alias("Newark", &["newarkstation"], &["ne"]),
    alias("Noble", &["noblestation"], &["nob"]),
    alias("Norristown TC", &["norristowntransportationcenter"], &["norr"]),
    alias("North Broad St", &["northbroad"], &["northbroad"]),
    alias("North Hills", &["northhills"], &["northh"]),
    alias("North Philadelphia", &["northphiladelphia"], &["northp"]),
    alias("North Wales", &["northwales", "wales"], &["northw"]),
    alias("Norwood", &["norwood"], &["no"]),
    alias("Olney", &["olney"], &["ol"]),
    alias("Oreland", &["oreland"], &["or"]),
    alias("Overbrook", &["overbrook"], &["ov"]),
    alias("Paoli", &["paoli"], &["pa"]),
    alias("Penllyn", &["penllyn"], &["penl"]),
    alias("Pennbrook", &["pennbrook"], &["pe"]),
    alias("Philmont", &["philmont"], &["ph"]),
    alias("Primos", &["primos"], &["pri"]),
    alias("Prospect Park", &["prospectpark"], &["pr"]),
    alias("Queen Lane", &["queenlane"], &["qu"]),
    alias("Radnor", &["radnor"], &["ra"]),
    alias("Ridley Park", &["ridleypark"], &["ri"]),
    alias("Rosemont", &["rosemont"], &["rose"]),
    alias("Roslyn", &["roslyn"], &["ro"]),
    alias("Rydal", &["rydal"], &["ryd"]),
    alias("Ryers", &["ryers"], &["ry"]),
    alias("Secane", &["secane"], &["sec"]),
    alias("Sedgwick", &["sedgwick"], &["se"]),
    alias("Sharon Hill", &["sharonhill"], &["sh"]),
    alias("Somerton", &["somerton"], &["so"]),
    alias("Spring Mill", &["springmill"], &["sp"]),
    alias("St. Davids", &["st.davids", "stdavids"], &["davi", "st.d"]),
    alias("St. Martins", &["st.martins", "stmartins"], &["st.m", "mart"]),
    alias("Stenton", &["stenton"], &["ste"]),
    alias("Strafford", &["strafford"], &["st"]),
    alias("Suburban Station", &["suburbanstation"], &["su"]),
    alias("Swarthmore", &["swarthmore"], &["sw"]),
    alias("Tacony", &["tacony"], &["ta"]),
    alias("Temple U", &["templeuniversity"], &["te"]),
    alias("Thorndale", &["thorndale"], &["th"]),
    alias("Torresdale", &["torresdale"], &["to"]),
    alias("Trenton", &["trentontransitcenter"], &["tren"]),
    alias("Trevose", &["trevose"], &["tre"]),
    alias("Tulpehocken", &["tulpehocken"], &["tu"]),
    alias("University City", &["universitycity"], &["un"]),
    alias("Upsal", &["upsal"], &["up"]),
    alias("Villanova", &["villanova"], &["vi"]),
    alias("Wallingford", &["wallingford"], &["wal"]),
    alias("Warminster", &["warminster"], &["war"]),
    alias("Washington Lane", &["washingtonlane"], &["was"]),
    alias("Wayne Jct", &["waynejunction"], &["waynej"]),
    alias("Wayne Station", &["wayne"], &["wa"]),
    alias("West Trenton", &["westtrenton,nj"], &["we"]),
    alias("Whitford", &["whitford"], &["wh"]),
    alias("Willow Grove", &["willowgrove"], &["will"]),
    alias("Wilmington", &["wilmington,de"], &["wil"]),
    alias("Wissahickon", &["wissahickon"], &["wiss"]),
    alias("Wister", &["wister"], &["wi"]),
    alias("Woodbourne", &["woodbourne"], &["wo"]),
    alias("Wyndmoor", &["wyndmoor"], &["wynd"]),
    alias("Wynnefield Avenue", &["wynnefieldavenue"], &["wynne"]),
    alias("Wynnewood", &["wynnewood"], &["wy"]),
    alias("Yardley", &["yardley"], &["ya"]),
];

static SEPTA: StationCatalog = StationCatalog::new(SEPTA_ALIASES, FALLBACK_STATION);

/// An ordered set of station rules with a fallback.
#[derive(Debug, Clone, Copy)]
pub struct StationCatalog {
    aliases: &'static [StationAlias],
    fallback: &'static str,
}

impl StationCatalog {
    /// Create a catalog from an ordered rule table.
    pub const fn new(aliases: &'static [StationAlias], fallback: &'static str) -> Self {
        Self { aliases, fallback }
    }

    /// The SEPTA Regional Rail catalog, shared for the life of the process.
    pub fn septa() -> &'static StationCatalog {
        &SEPTA
    }

    /// Resolve a typed fragment to a canonical station name.
    ///
    /// Never fails: a fragment matching no rule (including the empty
    /// string) resolves to the fallback station.
    pub fn resolve(&self, fragment: &str) -> StationName {
        let normalized = normalize(fragment);

        let name = self
            .aliases
            .iter()
            .find(|a| a.matches(&normalized))
            .map_or(self.fallback, |a| a.name);

        StationName::from_table(name)
    }

    /// The fallback station.
    pub fn fallback(&self) -> StationName {
        StationName::from_table(self.fallback)
    }

    /// Canonical names in rule order.
    pub fn names(&self) -> impl Iterator<Item = StationName> + '_ {
        self.aliases.iter().map(|a| StationName::from_table(a.name))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Resolve a fragment against the SEPTA catalog.
pub fn resolve(fragment: &str) -> StationName {
    StationCatalog::septa().resolve(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn name(fragment: &str) -> &'static str {
        resolve(fragment).as_str()
    }

    #[test]
    fn thirtieth_street_shorthands() {
        assert_eq!(name("30th"), "30th Street Station");
        assert_eq!(name("30St"), "30th Street Station");
        assert_eq!(name("30"), "30th Street Station");
        assert_eq!(name("30 street"), "30th Street Station");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(name("dev"), "Devon");
        assert_eq!(name("DEV"), "Devon");
        assert_eq!(name("Devon"), "Devon");
    }

    #[test]
    fn spaces_are_ignored() {
        assert_eq!(name("Bryn Mawr"), "Bryn Mawr");
        assert_eq!(name("  Suburban  "), "Suburban Station");
        assert_eq!(name("Chestnut Hill East"), "Chestnut Hill East");
        assert_eq!(name("Mt Airy"), "Mt Airy");
        assert_eq!(name("Mt. Airy"), "Mt Airy");
    }

    #[test]
    fn unmatched_falls_back() {
        assert_eq!(name(""), FALLBACK_STATION);
        assert_eq!(name("   "), FALLBACK_STATION);
        assert_eq!(name("xyz-garbage"), FALLBACK_STATION);
        assert_eq!(name("3"), FALLBACK_STATION);
        assert_eq!(name("germ"), FALLBACK_STATION);
    }

    #[test]
    fn exact_only_rules() {
        assert_eq!(name("terma"), "Airport Terminal A");
        assert_eq!(name("Airport Terminal B"), "Airport Terminal B");
        assert_eq!(name("termc"), "Airport Terminal C-D");
        assert_eq!(name("terminal f"), "Airport Terminal E-F");
        // No prefix rule for the terminals, so "te" (Temple U) takes it
        assert_eq!(name("term"), "Temple U");
    }

    #[test]
    fn longer_prefix_declared_first_wins() {
        assert_eq!(name("allegheny"), "Allegheny");
        assert_eq!(name("allen"), "Allen Lane");
        assert_eq!(name("highland ave"), "Highland Ave");
        assert_eq!(name("highland"), "Highland");
        assert_eq!(name("wayne jct"), "Wayne Jct");
        assert_eq!(name("wayne"), "Wayne Station");
        assert_eq!(name("lansdale"), "Lansdale");
        assert_eq!(name("lansdowne"), "Lansdowne");
    }

    #[test]
    fn nickname_literals() {
        assert_eq!(name("east"), "Chestnut Hill East");
        assert_eq!(name("west"), "Chestnut Hill West");
        assert_eq!(name("aldan"), "Clifton-Aldan");
        assert_eq!(name("wick"), "Eastwick Station");
        assert_eq!(name("yeadon"), "Fernwood");
        assert_eq!(name("ft"), "Ft Washington");
        assert_eq!(name("airy"), "Mt Airy");
        assert_eq!(name("st davids"), "St. Davids");
        assert_eq!(name("st.m"), "St. Martins");
    }

    #[test]
    fn earlier_short_prefixes_shadow_later_rules() {
        // "col" (Colmar) sits above the "college" literal
        assert_eq!(name("college"), "Colmar");
        // "bri" (Bristol) sits above the "britain" literal
        assert_eq!(name("britain"), "Bristol");
        // "for" (Forest Hills) sits above Ft Washington and Fortuna
        assert_eq!(name("fortwashington"), "Forest Hills");
        assert_eq!(name("fortuna"), "Forest Hills");
        // "da" (Darby) sits above the "davi" prefix for St. Davids
        assert_eq!(name("davids"), "Darby");
        // Delaware Valley College's "da" prefix is never reached
        assert_eq!(name("dela"), "Devon");
        assert_eq!(name("delaware valley college"), "Delaware Valley College");
        // "ne" (Newark) catches partial Neshaminy fragments
        assert_eq!(name("neshaminy"), "Newark");
        assert_eq!(name("neshaminy falls"), "Neshaminy Falls");
        // "ma" (Market East) sits above the "mart" prefix for St. Martins
        assert_eq!(name("mart"), "Market East");
        // "un" (University City) catches anything starting with "un"
        assert_eq!(name("unknown-garbage-xyz"), "University City");
    }

    #[test]
    fn uppercase_literal_is_unreachable() {
        // Input is lowercased before matching, so this literal never fires
        // and "was" (Washington Lane) takes the input instead.
        assert!(
            SEPTA_ALIASES
                .iter()
                .any(|a| a.exact.contains(&"Washington"))
        );
        assert_eq!(name("Washington"), "Washington Lane");
    }

    #[test]
    fn exact_literals_are_unique() {
        let mut seen = HashSet::new();
        for alias in SEPTA_ALIASES {
            for literal in alias.exact {
                assert!(seen.insert(*literal), "duplicate literal {literal:?}");
            }
        }
    }

    #[test]
    fn table_size_and_order() {
        let catalog = StationCatalog::septa();
        assert_eq!(catalog.len(), 155);
        assert!(!catalog.is_empty());

        let names: Vec<_> = catalog.names().map(|n| n.as_str()).collect();
        assert_eq!(names[0], "9th St");
        assert_eq!(names[1], "30th Street Station");
        assert_eq!(names[names.len() - 1], "Yardley");
    }

    #[test]
    fn fallback_is_a_catalog_name() {
        let catalog = StationCatalog::septa();
        assert_eq!(catalog.fallback().as_str(), FALLBACK_STATION);
        assert!(catalog.names().any(|n| n == catalog.fallback()));
    }

    #[test]
    fn fallback_name_round_trips() {
        assert_eq!(name(FALLBACK_STATION), FALLBACK_STATION);
    }

    #[test]
    fn custom_catalog() {
        static RULES: &[StationAlias] = &[
            alias("Short", &[], &["ab"]),
            alias("Long", &["abc"], &["abcd"]),
        ];
        let catalog = StationCatalog::new(RULES, "Home");

        assert_eq!(catalog.resolve("ab").as_str(), "Short");
        // The earlier prefix wins even against an exact literal further down
        assert_eq!(catalog.resolve("abc").as_str(), "Short");
        assert_eq!(catalog.resolve("x").as_str(), "Home");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any input resolves to a non-empty catalog name
        #[test]
        fn resolve_is_total(s in ".*") {
            let resolved = resolve(&s);
            prop_assert!(!resolved.as_str().is_empty());
            prop_assert!(StationCatalog::septa().names().any(|n| n == resolved));
        }

        /// Resolving twice gives the same answer
        #[test]
        fn resolve_is_idempotent(s in ".*") {
            prop_assert_eq!(resolve(&s), resolve(&s));
        }

        /// ASCII case never changes the result
        #[test]
        fn ascii_case_insensitive(s in "[a-zA-Z0-9 .,-]{0,24}") {
            prop_assert_eq!(resolve(&s.to_ascii_uppercase()), resolve(&s.to_ascii_lowercase()));
        }

        /// Spaces never change the result
        #[test]
        fn spaces_ignored(s in "[a-z0-9 .]{0,24}") {
            prop_assert_eq!(resolve(&s), resolve(&s.replace(' ', "")));
        }
    }
}
