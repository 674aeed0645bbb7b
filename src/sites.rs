//! Static directory of listing sources and gig sections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::Error;

/// Human-readable source name → source identifier, in search order.
///
/// Names are not unique and several names share an identifier; see
/// [`sites`] for the deduplicated search list.
pub const SITES: &[(&str, &str)] = &[
    // == West Coast ==
    // California
    ("SF Bay Area", "sfbay"),
    ("Los Angeles", "losangeles"),
    ("San Diego", "sandiego"),
    ("Sacramento", "sacramento"),
    ("Inland Empire", "inlandempire"),
    ("Orange County", "orangecounty"),
    ("Fresno", "fresno"),
    ("Ventura County", "ventura"),
    ("Bakersfield", "bakersfield"),
    ("Long Beach", "longbeach"),
    ("Palm Springs", "palmsprings"),
    ("Monterey Bay", "monterey"),
    ("Santa Barbara", "santabarbara"),
    ("Stockton", "stockton"),
    ("Modesto", "modesto"),
    ("San Luis Obispo", "slo"),
    ("Santa Maria", "santamaria"),
    ("Redding", "redding"),
    ("Chico", "chico"),
    ("Humboldt County", "humboldt"),
    ("Merced", "merced"),
    ("Susanville", "susanville"),
    ("Visalia-Tulare", "visalia"),
    ("Yuba-Sutter", "yubasutter"),
    ("Mendocino", "mendocino"),
    // Oregon
    ("Portland", "portland"),
    ("Eugene", "eugene"),
    ("Salem", "salem"),
    ("Medford", "medford"),
    ("Bend", "bend"),
    ("Corvallis", "corvallis"),
    ("Roseburg", "roseburg"),
    ("Klamath Falls", "klamath"),
    ("Coos Bay", "coosbay"),
    // Washington
    ("Seattle", "seattle"),
    ("Tacoma", "tacoma"),
    ("Spokane", "spokane"),
    ("Olympia", "olympia"),
    ("Bellingham", "bellingham"),
    ("Kennewick", "kpr"),
    ("Yakima", "yakima"),
    ("Wenatchee", "wenatchee"),
    ("Everett", "everett"),
    ("Port Angeles", "portangeles"),
    // == Southwest ==
    // Arizona
    ("Phoenix", "phoenix"),
    ("Tucson", "tucson"),
    ("Flagstaff", "flagstaff"),
    ("Yuma", "yuma"),
    ("Sierra Vista", "sierravista"),
    ("Prescott", "prescott"),
    ("Mohave County", "mohave"),
    // Nevada
    ("Las Vegas", "lasvegas"),
    ("Reno", "reno"),
    ("Elko", "elko"),
    // New Mexico
    ("Albuquerque", "albuquerque"),
    ("Santa Fe", "santafe"),
    ("Las Cruces", "lascruces"),
    ("Roswell", "roswell"),
    ("Farmington", "farmington"),
    // == Mountain States ==
    // Colorado
    ("Denver", "denver"),
    ("Colorado Springs", "cosprings"),
    ("Boulder", "boulder"),
    ("Fort Collins", "fortcollins"),
    ("Pueblo", "pueblo"),
    ("Western Slope", "westslope"),
    ("High Rockies", "rockies"),
    ("Eastern CO", "eastco"),
    // Utah
    ("Salt Lake City", "saltlakecity"),
    ("Provo", "provo"),
    ("Ogden", "ogden"),
    ("St George", "stgeorge"),
    ("Logan", "logan"),
    // Idaho
    ("Boise", "boise"),
    ("Idaho Falls", "eastidaho"),
    ("Twin Falls", "twinfalls"),
    ("Lewiston", "lewiston"),
    ("Pocatello", "pocatello"),
    // Montana
    ("Billings", "billings"),
    ("Missoula", "missoula"),
    ("Great Falls", "greatfalls"),
    ("Bozeman", "bozeman"),
    ("Helena", "helena"),
    ("Butte", "butte"),
    ("Kalispell", "kalispell"),
    // Wyoming
    ("Wyoming", "wyoming"),
    // == Midwest - North ==
    // Minnesota
    ("Minneapolis/St Paul", "minneapolis"),
    ("Duluth", "duluth"),
    ("Rochester", "rmn"),
    ("St Cloud", "stcloud"),
    ("Mankato", "mankato"),
    ("Bemidji", "bemidji"),
    // Wisconsin
    ("Milwaukee", "milwaukee"),
    ("Madison", "madison"),
    ("Green Bay", "greenbay"),
    ("Appleton", "appleton"),
    ("Eau Claire", "eauclaire"),
    ("La Crosse", "lacrosse"),
    ("Sheboygan", "sheboygan"),
    ("Wausau", "wausau"),
    // Michigan
    ("Detroit", "detroit"),
    ("Grand Rapids", "grandrapids"),
    ("Ann Arbor", "annarbor"),
    ("Lansing", "lansing"),
    ("Flint", "flint"),
    ("Kalamazoo", "kalamazoo"),
    ("Saginaw", "saginaw"),
    ("Upper Peninsula", "up"),
    ("Battle Creek", "battlecreek"),
    ("Monroe", "monroemi"),
    ("Muskegon", "muskegon"),
    ("Northern MI", "nmi"),
    ("Port Huron", "porthuron"),
    // == Midwest - Central ==
    // Illinois
    ("Chicago", "chicago"),
    ("Springfield", "springfieldil"),
    ("Champaign", "chambana"),
    ("Peoria", "peoria"),
    ("Rockford", "rockford"),
    ("Bloomington", "bloomington"),
    ("Carbondale", "carbondale"),
    ("Quad Cities", "quadcities"),
    ("Decatur", "decatur"),
    // Indiana
    ("Indianapolis", "indianapolis"),
    ("Fort Wayne", "fortwayne"),
    ("South Bend", "southbend"),
    ("Evansville", "evansville"),
    ("Bloomington", "bloomington"),
    ("Lafayette", "tippecanoe"),
    ("Terre Haute", "terrehaute"),
    ("Muncie", "muncie"),
    // Ohio
    ("Cleveland", "cleveland"),
    ("Columbus", "columbus"),
    ("Cincinnati", "cincinnati"),
    ("Dayton", "dayton"),
    ("Toledo", "toledo"),
    ("Akron/Canton", "akroncanton"),
    ("Youngstown", "youngstown"),
    ("Lima", "limaohio"),
    ("Mansfield", "mansfield"),
    ("Sandusky", "sandusky"),
    ("Zanesville", "zanesville"),
    // == Midwest - South ==
    // Missouri
    ("St Louis", "stlouis"),
    ("Kansas City", "kansascity"),
    ("Springfield MO", "springfield"),
    ("Columbia", "columbiamo"),
    ("Jefferson City", "jeffersoncity"),
    ("St Joseph", "stjoseph"),
    ("Joplin", "joplin"),
    // Kansas
    ("Wichita", "wichita"),
    ("Topeka", "topeka"),
    ("Lawrence", "lawrence"),
    ("Manhattan", "ksu"),
    ("Salina", "salina"),
    // Iowa
    ("Des Moines", "desmoines"),
    ("Cedar Rapids", "cedarrapids"),
    ("Iowa City", "iowacity"),
    ("Waterloo", "waterloo"),
    ("Sioux City", "siouxcity"),
    ("Quad Cities", "quadcities"),
    ("Ames", "ames"),
    ("Dubuque", "dubuque"),
    // Nebraska
    ("Omaha", "omaha"),
    ("Lincoln", "lincoln"),
    ("Grand Island", "grandisland"),
    ("North Platte", "northplatte"),
    ("Scottsbluff", "scottsbluff"),
    // == South Central ==
    // Texas
    ("Austin", "austin"),
    ("Dallas", "dallas"),
    ("Houston", "houston"),
    ("San Antonio", "sanantonio"),
    ("Fort Worth", "fortworth"),
    ("El Paso", "elpaso"),
    ("Corpus Christi", "corpuschristi"),
    ("McAllen", "mcallen"),
    ("Lubbock", "lubbock"),
    ("Amarillo", "amarillo"),
    ("Waco", "waco"),
    ("Beaumont", "beaumont"),
    ("Brownsville", "brownsville"),
    ("College Station", "collegestation"),
    ("Del Rio", "delrio"),
    ("Galveston", "galveston"),
    ("Killeen", "killeen"),
    ("Laredo", "laredo"),
    ("Midland", "midland"),
    ("Odessa", "odessa"),
    ("San Marcos", "sanmarcos"),
    ("Tyler", "tyler"),
    ("Victoria", "victoria"),
    ("Wichita Falls", "wichitafalls"),
    // Oklahoma
    ("Oklahoma City", "oklahomacity"),
    ("Tulsa", "tulsa"),
    ("Lawton", "lawton"),
    ("Stillwater", "stillwater"),
    // Arkansas
    ("Little Rock", "littlerock"),
    ("Fayetteville", "fayar"),
    ("Fort Smith", "fortsmith"),
    ("Jonesboro", "jonesboro"),
    ("Texarkana", "texarkana"),
    // == Southeast ==
    // Florida
    ("Miami", "miami"),
    ("Tampa", "tampa"),
    ("Orlando", "orlando"),
    ("Jacksonville", "jacksonville"),
    ("Fort Lauderdale", "fortlauderdale"),
    ("West Palm Beach", "westpalm"),
    ("Tallahassee", "tallahassee"),
    ("Gainesville", "gainesville"),
    ("Pensacola", "pensacola"),
    ("Daytona", "daytona"),
    ("Fort Myers", "fortmyers"),
    ("Sarasota", "sarasota"),
    ("Space Coast", "spacecoast"),
    ("Lakeland", "lakeland"),
    ("Ocala", "ocala"),
    ("Panama City", "panamacity"),
    ("St Augustine", "staugustine"),
    ("Treasure Coast", "treasure"),
    ("Keys", "keys"),
    // Georgia
    ("Atlanta", "atlanta"),
    ("Augusta", "augusta"),
    ("Savannah", "savannah"),
    ("Macon", "macon"),
    ("Athens", "athens"),
    ("Columbus", "columbusga"),
    ("Albany", "albanyga"),
    ("Brunswick", "brunswick"),
    ("Valdosta", "valdosta"),
    // North Carolina
    ("Charlotte", "charlotte"),
    ("Raleigh-Durham", "raleigh"),
    ("Greensboro", "greensboro"),
    ("Winston-Salem", "winstonsalem"),
    ("Asheville", "asheville"),
    ("Wilmington", "wilmington"),
    ("Fayetteville", "fayetteville"),
    ("Boone", "boone"),
    ("Greenville NC", "greenville"),
    ("Hickory", "hickory"),
    ("Jacksonville NC", "onslow"),
    ("Outer Banks", "outerbanks"),
    // South Carolina
    ("Charleston SC", "charleston"),
    ("Columbia", "columbia"),
    ("Greenville SC", "greenville"),
    ("Myrtle Beach", "myrtlebeach"),
    ("Hilton Head", "hiltonhead"),
    ("Florence SC", "florencesc"),
    ("Aiken", "aiken"),
    // Tennessee
    ("Nashville", "nashville"),
    ("Memphis", "memphis"),
    ("Knoxville", "knoxville"),
    ("Chattanooga", "chattanooga"),
    ("Tri-Cities", "tricities"),
    ("Clarksville", "clarksville"),
    ("Jackson TN", "jacksontn"),
    ("Cookeville", "cookeville"),
    // Alabama
    ("Birmingham", "birmingham"),
    ("Huntsville", "huntsville"),
    ("Mobile", "mobile"),
    ("Montgomery", "montgomery"),
    ("Auburn", "auburn"),
    ("Dothan", "dothan"),
    ("Florence", "shoals"),
    ("Gadsden", "gadsden"),
    ("Tuscaloosa", "tuscaloosa"),
    // Mississippi
    ("Jackson MS", "jackson"),
    ("Hattiesburg", "hattiesburg"),
    ("Biloxi", "gulfport"),
    ("Meridian", "meridian"),
    ("North MS", "northmiss"),
    ("Southwest MS", "natchez"),
    // Louisiana
    ("New Orleans", "neworleans"),
    ("Baton Rouge", "batonrouge"),
    ("Shreveport", "shreveport"),
    ("Lafayette", "lafayette"),
    ("Lake Charles", "lakecharles"),
    ("Monroe", "monroe"),
    ("Alexandria", "cenla"),
    ("Houma", "houma"),
    // Kentucky
    ("Louisville", "louisville"),
    ("Lexington", "lexington"),
    ("Bowling Green", "bgky"),
    ("Owensboro", "owensboro"),
    ("Western KY", "westky"),
    ("Eastern KY", "eastky"),
    // == Northeast ==
    // New York
    ("New York City", "newyork"),
    ("Long Island", "longisland"),
    ("Buffalo", "buffalo"),
    ("Rochester NY", "rochester"),
    ("Syracuse", "syracuse"),
    ("Albany", "albany"),
    ("Hudson Valley", "hudsonvalley"),
    ("Binghamton", "binghamton"),
    ("Elmira", "elmira"),
    ("Finger Lakes", "fingerlakes"),
    ("Glens Falls", "glensfalls"),
    ("Ithaca", "ithaca"),
    ("Oneonta", "oneonta"),
    ("Plattsburgh", "plattsburgh"),
    ("Potsdam", "potsdam"),
    ("Utica", "utica"),
    ("Watertown", "watertown"),
    // New Jersey
    ("North Jersey", "newjersey"),
    ("South Jersey", "southjersey"),
    ("Central Jersey", "jerseyshore"),
    // Pennsylvania
    ("Philadelphia", "philadelphia"),
    ("Pittsburgh", "pittsburgh"),
    ("Allentown", "allentown"),
    ("Erie", "erie"),
    ("Harrisburg", "harrisburg"),
    ("Scranton", "scranton"),
    ("State College", "pennstate"),
    ("Lancaster", "lancaster"),
    ("Altoona", "altoona"),
    ("Chambersburg", "chambersburg"),
    ("Meadville", "meadville"),
    ("Reading", "reading"),
    ("Williamsport", "williamsport"),
    ("York", "york"),
    // Massachusetts
    ("Boston", "boston"),
    ("Worcester", "worcester"),
    ("Springfield MA", "westernmass"),
    ("South Coast", "southcoast"),
    ("Cape Cod", "capecod"),
    // Connecticut
    ("Hartford", "hartford"),
    ("New Haven", "newhaven"),
    ("Eastern CT", "newlondon"),
    ("Northwest CT", "nwct"),
    // Maine
    ("Portland ME", "maine"),
    ("Bangor", "bangor"),
    ("Augusta", "augusta"),
    // New Hampshire
    ("New Hampshire", "nh"),
    // Rhode Island
    ("Rhode Island", "providence"),
    // Vermont
    ("Vermont", "vermont"),
    ("Burlington", "burlington"),
    // == Mid-Atlantic ==
    // Virginia
    ("Northern VA", "nova"),
    ("Richmond", "richmond"),
    ("Norfolk", "norfolk"),
    ("Roanoke", "roanoke"),
    ("Charlottesville", "charlottesville"),
    ("Danville", "danville"),
    ("Fredericksburg", "fredericksburg"),
    ("Harrisonburg", "harrisonburg"),
    ("Lynchburg", "lynchburg"),
    ("Winchester", "winchester"),
    // Maryland
    ("Baltimore", "baltimore"),
    ("Western Maryland", "westmd"),
    ("Eastern Shore", "easternshore"),
    ("Frederick", "frederick"),
    ("Southern Maryland", "smd"),
    // DC
    ("Washington DC", "washingtondc"),
    // Delaware
    ("Delaware", "delaware"),
    // West Virginia
    ("Charleston WV", "charlestonwv"),
    ("Huntington", "huntington"),
    ("Morgantown", "morgantown"),
    ("Northern Panhandle", "wheeling"),
    ("Parkersburg", "parkersburg"),
    ("Southern WV", "swv"),
    // == Alaska & Hawaii ==
    // Alaska
    ("Anchorage", "anchorage"),
    ("Fairbanks", "fairbanks"),
    ("Juneau", "juneau"),
    ("Kenai Peninsula", "kenai"),
    // Hawaii
    ("Honolulu", "honolulu"),
    ("Big Island", "bigisland"),
    ("Maui", "maui"),
    ("Kauai", "kauai"),
    // == Canada ==
    ("Vancouver BC", "vancouver"),
    ("Victoria BC", "victoria"),
    ("Montreal", "montreal"),
    ("Toronto", "toronto"),
    ("Calgary", "calgary"),
    ("Edmonton", "edmonton"),
    ("Ottawa", "ottawa"),
    ("Winnipeg", "winnipeg"),
    ("Halifax", "halifax"),
    ("Saskatoon", "saskatoon"),
    // == U.S. Territories ==
    ("Puerto Rico", "puertorico"),
    ("U.S. Virgin Islands", "virgin"),
    ("Guam", "guam"),
];

/// A listing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub name: &'static str,
    pub code: &'static str,
}

/// Every distinct source identifier once, under the first name declared
/// for it, in directory order.
pub fn sites() -> Vec<Site> {
    let mut seen = HashSet::new();
    SITES
        .iter()
        .filter(|(_, code)| seen.insert(*code))
        .map(|&(name, code)| Site { name, code })
        .collect()
}

/// Look up a site by identifier or (case-insensitive) human name.
pub fn find_site(name_or_code: &str) -> Option<Site> {
    let wanted = name_or_code.trim();
    let all = sites();

    all.iter()
        .find(|s| s.code == wanted)
        .or_else(|| all.iter().find(|s| s.name.eq_ignore_ascii_case(wanted)))
        .copied()
}

/// Resolve a list of site filters, keeping directory order.
///
/// An empty filter selects every site.
pub fn select_sites(filters: &[String]) -> Result<Vec<Site>, Error> {
    if filters.is_empty() {
        return Ok(sites());
    }

    let mut wanted = HashSet::new();
    for filter in filters {
        let site = find_site(filter).ok_or_else(|| Error::UnknownSource(filter.clone()))?;
        wanted.insert(site.code);
    }

    Ok(sites().into_iter().filter(|s| wanted.contains(s.code)).collect())
}

/// Gig section searched on every site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Section {
    /// Computer gigs
    #[serde(rename = "cpg")]
    #[value(name = "cpg")]
    ComputerGigs,
    /// Creative gigs
    #[serde(rename = "crg")]
    #[value(name = "crg")]
    CreativeGigs,
    /// General gigs
    #[serde(rename = "ggg")]
    #[value(name = "ggg")]
    GeneralGigs,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::ComputerGigs,
        Section::CreativeGigs,
        Section::GeneralGigs,
    ];

    /// Get the section code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::ComputerGigs => "cpg",
            Section::CreativeGigs => "crg",
            Section::GeneralGigs => "ggg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::ComputerGigs => "computer gigs",
            Section::CreativeGigs => "creative gigs",
            Section::GeneralGigs => "general gigs",
        }
    }

    /// Parse from a section code.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cpg" => Some(Section::ComputerGigs),
            "crg" => Some(Section::CreativeGigs),
            "ggg" => Some(Section::GeneralGigs),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
