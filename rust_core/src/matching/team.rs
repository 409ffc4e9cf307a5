//! Built-in sports registry and noise data.
//!
//! Canonical names follow the convention of the market feeds: college teams by
//! school, professional teams by nickname. College mascots are noise words so
//! "UConn Huskies" and "UConn" normalize alike; mascots that double as a
//! professional nickname ("tigers", "panthers", "cardinals") stay out of the
//! noise list and out of the college aliases.

use super::registry::RegistryEntry;

type TeamTable = &'static [(&'static str, &'static [&'static str])];

/// College mascots plus market-title boilerplate.
const NOISE_WORDS: &[&str] = &[
    "huskies", "crimson tide", "sun devils", "razorbacks", "buffaloes", "blue devils", "gators",
    "seminoles", "dawgs", "zags", "fighting illini", "hoosiers", "hawkeyes", "cyclones",
    "jayhawks", "wolverines", "spartans", "golden gophers", "gophers", "tar heels", "wolfpack",
    "fighting irish", "buckeyes", "sooners", "beavers", "nittany lions", "boilermakers",
    "scarlet knights", "aztecs", "gamecocks", "horned frogs", "volunteers", "longhorns",
    "aggies", "red raiders", "trojans", "utes", "commodores", "hokies", "demon deacons",
    "mountaineers", "badgers", "musketeers", "terrapins", "golden eagles", "wildcats",
    "bulldogs", "cougars", "winner", "moneyline",
];

/// Markers of the women's sub-population, matched as case-insensitive substrings.
const EXCLUSION_TERMS: &[&str] = &["women", "wnba", "ncaaw", "wcbb", "wnfl", "lady"];

const COLLEGE_TEAMS: TeamTable = &[
    ("alabama", &["bama", "ala"]),
    ("arizona", &["ari", "zona"]),
    ("arizona state", &["asu"]),
    ("arkansas", &["hogs", "ark"]),
    ("auburn", &["aub"]),
    ("baylor", &["bears", "bay"]),
    ("boston college", &["eagles", "bc"]),
    ("clemson", &["clem"]),
    ("colorado", &["buffs", "col", "cu"]),
    ("connecticut", &["uconn", "conn"]),
    ("duke", &[]),
    ("florida", &["fla", "uf"]),
    ("florida state", &["noles", "fsu"]),
    ("georgia", &["uga"]),
    ("gonzaga", &[]),
    ("houston", &["coogs", "hou"]),
    ("illinois", &["illini", "ill"]),
    ("indiana", &["ind", "iu"]),
    ("iowa", &[]),
    ("iowa state", &["isu"]),
    ("kansas", &["ku"]),
    ("kansas state", &["ksu", "k-state"]),
    ("kentucky", &["uk", "ky"]),
    ("louisiana state", &["lsu"]),
    ("louisville", &["cardinals", "cards", "lou"]),
    ("marquette", &["marq"]),
    ("maryland", &["terps", "md"]),
    ("memphis", &["mem"]),
    ("miami", &["hurricanes", "canes", "mia"]),
    ("michigan", &["mich", "um"]),
    ("michigan state", &["msu"]),
    ("minnesota", &["minn"]),
    ("mississippi", &["ole miss", "rebels"]),
    ("mississippi state", &["miss st", "msst"]),
    ("missouri", &["mizzou", "miz"]),
    ("north carolina", &["unc", "carolina"]),
    ("north carolina state", &["nc state", "ncsu"]),
    ("notre dame", &["irish", "nd"]),
    ("ohio state", &["osu"]),
    ("oklahoma", &["ou"]),
    ("oklahoma state", &["cowboys", "okst"]),
    ("oregon", &["ducks", "ore"]),
    ("oregon state", &["orst"]),
    ("penn state", &["psu"]),
    ("pittsburgh", &["panthers", "pitt"]),
    ("purdue", &["pur"]),
    ("rutgers", &["rut"]),
    ("san diego state", &["sdsu"]),
    ("south carolina", &["scar"]),
    ("stanford", &["cardinal", "stan"]),
    ("syracuse", &["orange", "cuse"]),
    ("tcu", &[]),
    ("tennessee", &["vols", "tenn"]),
    ("texas", &["horns", "tex", "ut"]),
    ("texas a&m", &["tamu"]),
    ("texas tech", &["ttu"]),
    ("ucla", &["bruins"]),
    ("usc", &["southern cal", "southern california"]),
    ("utah", &[]),
    ("vanderbilt", &["vandy"]),
    ("villanova", &["nova"]),
    ("virginia", &["cavaliers", "cavs", "uva", "hoos"]),
    ("virginia tech", &["vt"]),
    ("wake forest", &["wake"]),
    ("washington", &["udub", "uw"]),
    ("west virginia", &["wvu"]),
    ("wisconsin", &["wisc"]),
    ("xavier", &[]),
];

const NBA_TEAMS: TeamTable = &[
    ("76ers", &["sixers", "philadelphia 76ers", "philadelphia sixers", "phi", "philly"]),
    ("bucks", &["milwaukee bucks", "milwaukee", "mil"]),
    ("bulls", &["chicago bulls", "chicago", "chi"]),
    ("cavaliers", &["cavs", "cleveland cavaliers", "cleveland", "cle"]),
    ("celtics", &["boston celtics", "boston", "bos"]),
    ("clippers", &["la clippers", "los angeles clippers", "los angeles c", "clips", "lac"]),
    ("grizzlies", &["memphis grizzlies", "memphis", "mem"]),
    ("hawks", &["atlanta hawks", "atlanta", "atl"]),
    ("heat", &["miami heat", "miami", "mia"]),
    ("hornets", &["charlotte hornets", "charlotte", "cha"]),
    ("jazz", &["utah jazz", "utah", "uta"]),
    ("kings", &["sacramento kings", "sacramento", "sac"]),
    ("knicks", &["new york knicks", "ny knicks", "nyk"]),
    ("lakers", &["la lakers", "los angeles lakers", "los angeles l", "lal"]),
    ("magic", &["orlando magic", "orlando", "orl"]),
    ("mavericks", &["mavs", "dallas mavericks", "dallas", "dal"]),
    ("nets", &["brooklyn nets", "brooklyn", "bkn"]),
    ("nuggets", &["denver nuggets", "denver", "den"]),
    ("pacers", &["indiana pacers", "indiana", "ind"]),
    ("pelicans", &["pels", "new orleans pelicans", "new orleans", "nop"]),
    ("pistons", &["detroit pistons", "detroit", "det"]),
    ("raptors", &["toronto raptors", "toronto", "tor"]),
    ("rockets", &["houston rockets", "houston", "hou"]),
    ("spurs", &["san antonio spurs", "san antonio", "sas"]),
    ("suns", &["phoenix suns", "phoenix", "phx"]),
    ("thunder", &["oklahoma city thunder", "oklahoma city", "okc"]),
    ("timberwolves", &["wolves", "minnesota timberwolves", "minnesota", "min"]),
    ("trail blazers", &["blazers", "portland trail blazers", "portland", "por"]),
    ("warriors", &["golden state warriors", "golden state", "gsw", "gs", "dubs"]),
    ("wizards", &["washington wizards", "washington", "was"]),
];

const NFL_TEAMS: TeamTable = &[
    ("49ers", &["niners", "san francisco 49ers", "san francisco", "sf"]),
    ("bears", &["chicago bears", "chicago", "chi"]),
    ("bengals", &["cincinnati bengals", "cincinnati", "cin"]),
    ("bills", &["buffalo bills", "buffalo", "buf"]),
    ("broncos", &["denver broncos", "denver", "den"]),
    ("browns", &["cleveland browns", "cleveland", "cle"]),
    ("buccaneers", &["bucs", "tampa bay buccaneers", "tampa bay", "tampa", "tb"]),
    ("cardinals", &["cards", "arizona cardinals", "arizona", "ari"]),
    ("chargers", &["la chargers", "los angeles chargers", "lac"]),
    ("chiefs", &["kansas city chiefs", "kansas city", "kc"]),
    ("colts", &["indianapolis colts", "indianapolis", "ind"]),
    ("commanders", &["washington commanders", "washington", "was"]),
    ("cowboys", &["dallas cowboys", "dallas", "dal"]),
    ("dolphins", &["miami dolphins", "miami", "mia"]),
    ("eagles", &["philadelphia eagles", "philadelphia", "phi", "philly"]),
    ("falcons", &["atlanta falcons", "atlanta", "atl"]),
    ("giants", &["new york giants", "ny giants", "nyg"]),
    ("jaguars", &["jags", "jacksonville jaguars", "jacksonville", "jax"]),
    ("jets", &["new york jets", "ny jets", "nyj"]),
    ("lions", &["detroit lions", "detroit", "det"]),
    ("packers", &["green bay packers", "green bay", "gb"]),
    ("panthers", &["carolina panthers", "carolina", "car"]),
    ("patriots", &["pats", "new england patriots", "new england", "ne"]),
    ("raiders", &["las vegas raiders", "las vegas", "lv"]),
    ("rams", &["la rams", "los angeles rams", "lar"]),
    ("ravens", &["baltimore ravens", "baltimore", "bal"]),
    ("saints", &["new orleans saints", "new orleans", "no"]),
    ("seahawks", &["seattle seahawks", "seattle", "sea"]),
    ("steelers", &["pittsburgh steelers", "pittsburgh", "pit"]),
    ("texans", &["houston texans", "houston", "hou"]),
    ("titans", &["tennessee titans", "tennessee", "ten"]),
    ("vikings", &["minnesota vikings", "minnesota", "min"]),
];

const NHL_TEAMS: TeamTable = &[
    ("avalanche", &["avs", "colorado avalanche", "colorado", "col"]),
    ("blackhawks", &["chicago blackhawks", "chicago", "chi"]),
    ("blue jackets", &["jackets", "columbus blue jackets", "columbus", "cbj"]),
    ("blues", &["st louis blues", "st. louis blues", "stl"]),
    ("bruins", &["boston bruins", "boston", "bos"]),
    ("canadiens", &["habs", "montreal canadiens", "montreal", "mtl"]),
    ("canucks", &["vancouver canucks", "vancouver", "van"]),
    ("capitals", &["caps", "washington capitals", "washington", "wsh"]),
    ("coyotes", &["yotes", "arizona coyotes", "arizona", "ari"]),
    ("devils", &["new jersey devils", "new jersey", "nj", "njd"]),
    ("ducks", &["anaheim ducks", "anaheim", "ana"]),
    ("flames", &["calgary flames", "calgary", "cgy"]),
    ("flyers", &["philadelphia flyers", "philadelphia", "phi"]),
    ("golden knights", &["knights", "vegas golden knights", "vegas", "vgk"]),
    ("hurricanes", &["canes", "carolina hurricanes", "carolina", "car"]),
    ("islanders", &["isles", "new york islanders", "nyi"]),
    ("jets", &["winnipeg jets", "winnipeg", "wpg"]),
    ("kings", &["la kings", "los angeles kings", "lak"]),
    ("kraken", &["seattle kraken", "seattle", "sea"]),
    ("lightning", &["bolts", "tampa bay lightning", "tampa bay", "tbl"]),
    ("maple leafs", &["leafs", "toronto maple leafs", "toronto", "tor"]),
    ("oilers", &["edmonton oilers", "edmonton", "edm"]),
    ("panthers", &["florida panthers", "florida", "fla"]),
    ("penguins", &["pens", "pittsburgh penguins", "pittsburgh", "pit"]),
    ("predators", &["preds", "nashville predators", "nashville", "nsh"]),
    ("rangers", &["new york rangers", "nyr"]),
    ("red wings", &["wings", "detroit red wings", "detroit", "det"]),
    ("sabres", &["buffalo sabres", "buffalo", "buf"]),
    ("senators", &["sens", "ottawa senators", "ottawa", "ott"]),
    ("sharks", &["san jose sharks", "san jose", "sjs"]),
    ("stars", &["dallas stars", "dallas", "dal"]),
    ("wild", &["minnesota wild", "minnesota", "min"]),
];

const MLB_TEAMS: TeamTable = &[
    ("angels", &["los angeles angels", "la angels", "anaheim angels", "laa"]),
    ("astros", &["stros", "houston astros", "houston", "hou"]),
    ("athletics", &["a's", "as", "oakland athletics", "oakland", "oak"]),
    ("blue jays", &["jays", "toronto blue jays", "toronto", "tor"]),
    ("braves", &["atlanta braves", "atlanta", "atl"]),
    ("brewers", &["milwaukee brewers", "milwaukee", "mil"]),
    ("cardinals", &["cards", "st louis cardinals", "st. louis cardinals", "stl"]),
    ("cubs", &["chicago cubs", "chi cubs", "chc"]),
    ("diamondbacks", &["dbacks", "d-backs", "arizona diamondbacks", "arizona", "ari"]),
    ("dodgers", &["los angeles dodgers", "la dodgers", "lad"]),
    ("giants", &["san francisco giants", "sf giants", "sf"]),
    ("guardians", &["cleveland guardians", "cleveland", "cle"]),
    ("mariners", &["seattle mariners", "seattle", "sea"]),
    ("marlins", &["miami marlins", "florida marlins", "miami", "mia"]),
    ("mets", &["new york mets", "ny mets", "nym"]),
    ("nationals", &["nats", "washington nationals", "washington", "wsh"]),
    ("orioles", &["o's", "os", "baltimore orioles", "baltimore", "bal"]),
    ("padres", &["san diego padres", "san diego", "sd"]),
    ("phillies", &["philadelphia phillies", "philadelphia", "phi", "philly"]),
    ("pirates", &["pittsburgh pirates", "pittsburgh", "pit"]),
    ("rangers", &["texas rangers", "texas", "tex"]),
    ("rays", &["tampa bay rays", "tampa bay", "tb"]),
    ("red sox", &["redsox", "boston red sox", "boston", "bos"]),
    ("reds", &["cincinnati reds", "cincinnati", "cin"]),
    ("rockies", &["colorado rockies", "colorado", "col"]),
    ("royals", &["kansas city royals", "kansas city", "kc"]),
    ("tigers", &["detroit tigers", "detroit", "det"]),
    ("twins", &["minnesota twins", "minnesota", "min"]),
    ("white sox", &["whitesox", "chicago white sox", "chi sox", "chw"]),
    ("yankees", &["yanks", "new york yankees", "ny yankees", "nyy"]),
];

/// Category tag and team table for every built-in league.
const LEAGUE_TABLES: &[(&str, TeamTable)] = &[
    ("MBB", COLLEGE_TEAMS),
    ("NCAAF", COLLEGE_TEAMS),
    ("NBA", NBA_TEAMS),
    ("NFL", NFL_TEAMS),
    ("NHL", NHL_TEAMS),
    ("MLB", MLB_TEAMS),
];

pub fn default_noise_words() -> Vec<String> {
    NOISE_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn default_exclusion_terms() -> Vec<String> {
    EXCLUSION_TERMS.iter().map(|w| w.to_string()).collect()
}

fn entry_id(category: &str, canonical: &str) -> String {
    let slug: String = canonical
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}", category.to_lowercase(), slug)
}

/// Registry entries for every built-in league.
pub fn default_registry() -> Vec<RegistryEntry> {
    LEAGUE_TABLES
        .iter()
        .flat_map(|(category, table)| {
            table.iter().map(move |(canonical, aliases)| {
                RegistryEntry::new(entry_id(category, canonical), *canonical, aliases, *category)
            })
        })
        .collect()
}

/// Built-in entries for one category tag (case-insensitive).
pub fn registry_for_category(category: &str) -> Vec<RegistryEntry> {
    let upper = category.trim().to_uppercase();
    default_registry()
        .into_iter()
        .filter(|e| e.category == upper)
        .collect()
}
