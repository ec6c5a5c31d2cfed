//! FAA contraction expansion for display
//!
//! `RWY 15/33 CLSD` → `RUNWAY. 15/33 CLOSED.`

use std::collections::HashMap;
use std::sync::LazyLock;

static CONTRACTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

/// Look up a single contraction, exact match only
pub fn lookup(word: &str) -> Option<&'static str> {
    CONTRACTIONS.get(word).copied()
}

/// Exact match first, then the same word with a trailing period
fn resolve(word: &str) -> Option<&'static str> {
    lookup(word).or_else(|| lookup(&format!("{word}.")))
}

/// Expand every contraction in `text`
///
/// Resolved words are followed by a period. Words joined with `/` are
/// resolved part by part (`LOC/GP` → `LOCALIZER./GLIDE PATH`); unresolved
/// words and parts pass through unchanged.
pub fn expand_contractions(text: &str) -> String {
    text.split_whitespace()
        .map(expand_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_word(word: &str) -> String {
    if let Some(expansion) = resolve(word) {
        return format!("{expansion}.");
    }
    if !word.contains('/') {
        return word.to_string();
    }

    let parts: Vec<(&str, Option<&str>)> =
        word.split('/').map(|part| (part, resolve(part))).collect();
    if parts.iter().all(|(_, expansion)| expansion.is_none()) {
        return word.to_string();
    }

    let mut expanded = String::with_capacity(word.len() * 4);
    for (i, (part, expansion)) in parts.iter().enumerate() {
        if i > 0 {
            if parts[i - 1].1.is_some() {
                expanded.push('.');
            }
            expanded.push('/');
        }
        expanded.push_str(expansion.unwrap_or(*part));
    }
    expanded
}

#[rustfmt::skip]
const TABLE: &[(&str, &str)] = &[
    ("ABN", "AERODROME BEACON"),
    ("ABV", "ABOVE"),
    ("ACFT", "AIRCRAFT"),
    ("ACR", "AIR CARRIER"),
    ("ACT", "ACTIVE"),
    ("ACTV", "ACTIVE"),
    ("AD", "AERODROME"),
    ("ADJ", "ADJACENT"),
    ("ADZ", "ADVISE"),
    ("AFD", "AIRPORT/FACILITY DIRECTORY"),
    ("AGL", "ABOVE GROUND LEVEL"),
    ("ALS", "APPROACH LIGHTING SYSTEM"),
    ("ALT", "ALTITUDE"),
    ("ALTM", "ALTIMETER"),
    ("ALTN", "ALTERNATE"),
    ("ALTNLY", "ALTERNATELY"),
    ("ANT", "ANTENNA"),
    ("AP", "AIRPORT"),
    ("APAPI", "ABBREVIATED PRECISION APPROACH PATH INDICATOR"),
    ("APCH", "APPROACH"),
    ("APN", "APRON"),
    ("APV", "APPROVE"),
    ("ARFF", "AIRCRAFT RESCUE AND FIRE FIGHTING"),
    ("ARP", "AIRPORT REFERENCE POINT"),
    ("ARPT", "AIRPORT"),
    ("ARR", "ARRIVE"),
    ("ASDE", "AIRPORT SURFACE DETECTION EQUIPMENT"),
    ("ASOS", "AUTOMATED SURFACE OBSERVING SYSTEM"),
    ("ASPH", "ASPHALT"),
    ("ASR", "AIRPORT SURVEILLANCE RADAR"),
    ("ATC", "AIR TRAFFIC CONTROL"),
    ("ATCT", "AIRPORT TRAFFIC CONTROL TOWER"),
    ("ATIS", "AUTOMATED TERMINAL INFORMATION SERVICE"),
    ("AUTH", "AUTHORITY"),
    ("AVBL", "AVAILABLE"),
    ("AWOS", "AUTOMATIC WEATHER OBSERVING SYSTEM"),
    ("AZM", "AZIMUTH"),
    ("BA", "BRAKING ACTION"),
    ("BC", "BACK COURSE"),
    ("BCN", "BEACON"),
    ("BLDG", "BUILDING"),
    ("BLW", "BELOW"),
    ("BND", "BOUND"),
    ("BRAF", "BRAKING ACTION FAIR"),
    ("BRAG", "BRAKING ACTION GOOD"),
    ("BRAN", "BRAKING ACTION NIL"),
    ("BRAP", "BRAKING ACTION POOR"),
    ("BRG", "BEARING"),
    ("BYD", "BEYOND"),
    ("CAAS", "CLASS A AIRSPACE"),
    ("CAT", "CATEGORY"),
    ("CBAS", "CLASS B AIRSPACE"),
    ("CBSA", "CLASS B SURFACE AREA"),
    ("CCAS", "CLASS C AIRSPACE"),
    ("CCSA", "CLASS C SURFACE AREA"),
    ("CD", "CLEARANCE DELIVERY"),
    ("CDAS", "CLASS D AIRSPACE"),
    ("CDSA", "CLASS D SURFACE AREA"),
    ("CEAS", "CLASS E AIRSPACE"),
    ("CESA", "CLASS E SURFACE AREA"),
    ("CFA", "CONTROLLED FIRING AREA"),
    ("CGAS", "CLASS G AIRSPACE"),
    ("CHG", "CHANGE"),
    ("CIG", "CEILING"),
    ("CK", "CHECK"),
    ("CL", "CENTERLINE"),
    ("CLSD", "CLOSED"),
    ("CMB", "CLIMB"),
    ("CMSND", "COMMISSIONED"),
    ("CNL", "CANCEL"),
    ("COM", "COMMUNICATIONS"),
    ("CONC", "CONCRETE"),
    ("CONS", "CONTINUOUS"),
    ("CONT", "CONTINUE"),
    ("CPD", "COUPLED"),
    ("CRS", "COURSE"),
    ("CTAF", "COMMON TRAFFIC ADVISORY FREQUENCY"),
    ("CTC", "CONTACT"),
    ("CTL", "CONTROL"),
    ("CTR", "CENTER"),
    ("DALGT", "DAYLIGHT"),
    ("DCMSND", "DECOMMISSIONED"),
    ("DCT", "DIRECT"),
    ("DEGS", "DEGREES"),
    ("DEP", "DEPART"),
    ("DH", "DECISION HEIGHT"),
    ("DISABLD", "DISABLED"),
    ("DIST", "DISTANCE"),
    ("DLA", "DELAY"),
    ("DLT", "DELETE"),
    ("DLY", "DAILY"),
    ("DME", "DISTANCE MEASURING EQUIPMENT"),
    ("DMSTN", "DEMONSTRATION"),
    ("DP", "DEPARTURE PROCEDURE"),
    ("DRFT", "DRIFTED SNOW"),
    ("DSPLCD", "DISPLACED"),
    ("E", "EAST"),
    ("EB", "EASTBOUND"),
    ("EFAS", "EN ROUTE FLIGHT ADVISORY SERVICE"),
    ("EFF", "EFFECTIVE"),
    ("ELEV", "ELEVATION"),
    ("EMERG", "EMERGENCY"),
    ("ENG", "ENGINE"),
    ("ENRT", "EN ROUTE"),
    ("ENTR", "ENTIRE"),
    ("EQUIP", "EQUIPMENT"),
    ("EXC", "EXCEPT"),
    ("EXTD", "EXTENDED"),
    ("E.G.", "FOR EXAMPLE"),
    ("FAC", "FACILITY"),
    ("FAF", "FINAL APPROACH FIX"),
    ("FDC", "FLIGHT DATA CENTER"),
    ("FI/P", "FLIGHT INSPECTION PERMANENT"),
    ("FI/T", "FLIGHT INSPECTION TEMPORARY"),
    ("FICON", "FIELD CONDITION"),
    ("FLD", "FIELD"),
    ("FLT", "FLIGHT"),
    ("FLW", "FOLLOW"),
    ("FM", "FROM"),
    ("FNA", "FINAL APPROACH"),
    ("FREQ", "FREQUENCY"),
    ("FRH", "FLY RUNWAY HEADING"),
    ("FRI", "FRIDAY"),
    ("FRZN", "FROZEN"),
    ("FSS", "FLIGHT SERVICE STATION"),
    ("FT", "FEET"),
    ("GC", "GROUND CONTROL"),
    ("GCA", "GROUND CONTROL APPROACH"),
    ("GND", "GROUND"),
    ("GOVT", "GOVERNMENT"),
    ("GP", "GLIDE PATH"),
    ("GPS", "GLOBAL POSITIONING SYSTEM"),
    ("GRVL", "GRAVEL"),
    ("GS", "GLIDE SLOPE"),
    ("HAA", "HEIGHT ABOVE AIRPORT"),
    ("HAT", "HEIGHT ABOVE TOUCHDOWN"),
    ("HAZ", "HAZARD"),
    ("HDG", "HEADING"),
    ("HEL", "HELICOPTER"),
    ("HELI", "HELIPORT"),
    ("HGR", "HANGAR"),
    ("HGT", "HEIGHT"),
    ("HIRL", "HIGH INTENSITY RUNWAY LIGHTS"),
    ("HIWAS", "HAZARDOUS INFLIGHT WEATHER ADVISORY SERVICE"),
    ("HLDG", "HOLDING"),
    ("HOL", "HOLIDAY"),
    ("HP", "HOLDING PATTERN"),
    ("HR", "HOUR"),
    ("I.E.", "THAT IS"),
    ("IAF", "INITIAL APPROACH FIX"),
    ("IAP", "INSTRUMENT APPROACH PROCEDURE"),
    ("IFR", "INSTRUMENT FLIGHT RULES"),
    ("ILS", "INSTRUMENT LANDING SYSTEM"),
    ("INBD", "INBOUND"),
    ("INDEFLY", "INDEFINITELY"),
    ("INFO", "INFORMATION"),
    ("INOP", "INOPERATIVE"),
    ("INSTR", "INSTRUMENT"),
    ("INT", "INTERSECTION"),
    ("INTL", "INTERNATIONAL"),
    ("IR", "ICE ON RUNWAY"),
    ("L", "LEFT"),
    ("LAA", "LOCAL AIRPORT ADVISORY"),
    ("LAHSO", "LAND AND HOLD SHORT OPERATIONS"),
    ("LAT", "LATITUDE"),
    ("LAWRS", "LIMITED AVIATION WEATHER REPORTING STATION"),
    ("LB", "POUNDS"),
    ("LC", "LOCAL CONTROL"),
    ("LCL", "LOCAL"),
    ("LCTD", "LOCATED"),
    ("LDA", "LOCALIZER TYPE DIRECTIONAL AID"),
    ("LDG", "LANDING"),
    ("LGT", "LIGHT"),
    ("LGTD", "LIGHTED"),
    ("LIRL", "LOW INTENSITY RUNWAY LIGHTS"),
    ("LLWAS", "LOW LEVEL WIND SHEAR ALERT SYSTEM"),
    ("LLZ", "LOCALIZER"),
    ("LM", "COMPASS LOCATOR AT ILS MIDDLE MARKER"),
    ("LO", "COMPASS LOCATOR AT ILS OUTER MARKER"),
    ("LOC", "LOCALIZER"),
    ("LONG", "LONGITUDE"),
    ("LRN", "LONG RANGE NAVIGATION"),
    ("LSR", "LOOSE SNOW ON RUNWAY"),
    ("LT", "LEFT TURN"),
    ("MAG", "MAGNETIC"),
    ("MAINT", "MAINTAIN"),
    ("MALS", "MEDIUM INTENSITY APPROACH LIGHT SYSTEM"),
    ("MALSF", "MEDIUM INTENSITY APPROACH LIGHT SYSTEM WITH SEQUENCED FLASHERS"),
    ("MALSR", "MEDIUM INTENSITY APPROACH LIGHT SYSTEM WITH RUNWAY ALIGNMENT INDICATOR LIGHTS"),
    ("MAPT", "MISSED APPROACH POINT"),
    ("MCA", "MINIMUM CROSSING ALTITUDE"),
    ("MDA", "MINIMUM DESCENT ALTITUDE"),
    ("MEA", "MINIMUM EN ROUTE ALTITUDE"),
    ("MED", "MEDIUM"),
    ("MIL", "MILITARY"),
    ("MIN", "MINUTE"),
    ("MIRL", "MEDIUM INTENSITY RUNWAY LIGHTS"),
    ("MKR", "MARKER"),
    ("MLS", "MICROWAVE LANDING SYSTEM"),
    ("MM", "MIDDLE MARKER"),
    ("MNM", "MINIMUM"),
    ("MNT", "MONITOR"),
    ("MNTN", "MAINTAIN"),
    ("MOA", "MILITARY OPERATIONS AREA"),
    ("MOC", "MINIMUM OBSTRUCTION CLEARANCE"),
    ("MON", "MONDAY"),
    ("MRA", "MINIMUM RECEPTION ALTITUDE"),
    ("MSA", "MINIMUM SAFE ALTITUDE"),
    ("MSAW", "MINIMUM SAFE ALTITUDE WARNING"),
    ("MSG", "MESSAGE"),
    ("MSL", "MEAN SEA LEVEL"),
    ("MUNI", "MUNICIPAL"),
    ("N", "NORTH"),
    ("NA", "NOT AUTHORIZED"),
    ("NAV", "NAVIGATION"),
    ("NAVAID", "NAVIGATIONAL AID"),
    ("NB", "NORTHBOUND"),
    ("NDB", "NONDIRECTIONAL RADIO BEACON"),
    ("NE", "NORTHEAST"),
    ("NGT", "NIGHT"),
    ("NM", "NAUTICAL MILES"),
    ("NMR", "NAUTICAL MILE RADIUS"),
    ("NONSTD", "NONSTANDARD"),
    ("NOPT", "NO PROCEDURE TURN REQUIRED"),
    ("NOTAM", "NOTICE TO AIRMEN"),
    ("NR", "NUMBER"),
    ("NTAP", "NOTICES TO AIRMEN PUBLICATION"),
    ("NW", "NORTHWEST"),
    ("NWS", "NATIONAL WEATHER SERVICE"),
    ("OBSC", "OBSCURED"),
    ("OBST", "OBSTRUCTION"),
    ("ODP", "OBSTACLE DEPARTURE PROCEDURE"),
    ("OM", "OUTER MARKER"),
    ("OPR", "OPERATE"),
    ("OPS", "OPERATION"),
    ("ORIG", "ORIGINAL"),
    ("OTS", "OUT OF SERVICE"),
    ("OVR", "OVER"),
    ("PAEW", "PERSONNEL AND EQUIPMENT WORKING"),
    ("PAPI", "PRECISION APPROACH PATH INDICATOR"),
    ("PAR", "PRECISION APPROACH RADAR"),
    ("PARL", "PARALLEL"),
    ("PAT", "PATTERN"),
    ("PAX", "PASSENGER"),
    ("PCL", "PILOT CONTROLLED LIGHTING"),
    ("PERM", "PERMANENT"),
    ("PIREP", "PILOT WEATHER REPORT"),
    ("PJE", "PARACHUTE JUMPING EXERCISE"),
    ("PLA", "PRACTICE LOW APPROACH"),
    ("PLN", "PLAN"),
    ("PLW", "PLOW"),
    ("PN", "PRIOR NOTICE REQUIRED"),
    ("PPR", "PRIOR PERMISSION REQUIRED"),
    ("PREV", "PREVIOUS"),
    ("PRI", "PRIMARY"),
    ("PRIRA", "PRIMARY RADAR"),
    ("PRKG", "PARKING"),
    ("PROC", "PROCEDURE"),
    ("PROP", "PROPELLER"),
    ("PSBL", "POSSIBLE"),
    ("PSR", "PACKED SNOW ON RUNWAY"),
    ("PT", "PROCEDURE TURN"),
    ("PVT", "PRIVATE"),
    ("RAIL", "RUNWAY ALIGNMENT INDICATOR LIGHTS"),
    ("RCAG", "REMOTE COMMUNICATION AIR/GROUND FACILITY"),
    ("RCL", "RUNWAY CENTERLINE"),
    ("RCLL", "RUNWAY CENTERLINE LIGHT SYSTEM"),
    ("RCO", "REMOTE COMMUNICATION OUTLET"),
    ("REC", "RECEIVE"),
    ("REIL", "RUNWAY END IDENTIFIER LIGHTS"),
    ("RELCTD", "RELOCATED"),
    ("REP", "REPORT"),
    ("RLLS", "RUNWAY LEAD-IN LIGHT SYSTEM"),
    ("RMK", "REMARK"),
    ("RMNDR", "REMAINDER"),
    ("RNAV", "AREA NAVIGATION"),
    ("RPLC", "REPLACE"),
    ("RQRD", "REQUIRED"),
    ("RRL", "RUNWAY REMAINING LIGHTS"),
    ("RSR", "EN ROUTE SURVEILLANCE RADAR"),
    ("RSVN", "RESERVATION"),
    ("RT", "RIGHT TURN"),
    ("RTE", "ROUTE"),
    ("RTR", "REMOTE TRANSMITTER/RECEIVER"),
    ("RTS", "RETURN TO SERVICE"),
    ("RUF", "ROUGH"),
    ("RVR", "RUNWAY VISUAL RANGE"),
    ("RVRM", "RUNWAY VISUAL RANGE MIDPOINT"),
    ("RVRR", "RUNWAY VISUAL RANGE ROLLOUT"),
    ("RVRT", "RUNWAY VISUAL RANGE TOUCHDOWN"),
    ("RWY", "RUNWAY"),
    ("S", "SOUTH"),
    ("SA", "SAND"),
    ("SAT", "SATURDAY"),
    ("SB", "SOUTHBOUND"),
    ("SDF", "SIMPLIFIED DIRECTIONAL FACILITY"),
    ("SE", "SOUTHEAST"),
    ("SFC", "SURFACE"),
    ("SFL", "SEQUENCE FLASHING LIGHTS"),
    ("SID", "STANDARD INSTRUMENT DEPARTURE"),
    ("SIMUL", "SIMULTANEOUS"),
    ("SIR", "PACKED OR COMPACTED SNOW AND ICE ON RUNWAY"),
    ("SKED", "SCHEDULED"),
    ("SLR", "SLUSH ON RUNWAY"),
    ("SN", "SNOW"),
    ("SNBNK", "SNOWBANK"),
    ("SNGL", "SINGLE"),
    ("SPD", "SPEED"),
    ("SR", "SUNRISE"),
    ("SS", "SUNSET"),
    ("SSALF", "SIMPLIFIED SHORT APPROACH LIGHTING SYSTEM WITH SEQUENCED FLASHERS"),
    ("SSALR", "SIMPLIFIED SHORT APPROACH LIGHTING SYSTEM WITH RUNWAY ALIGNMENT INDICATOR LIGHTS"),
    ("SSALS", "SIMPLIFIED SHORT APPROACH LIGHTING SYSTEM"),
    ("SSR", "SECONDARY SURVEILLANCE RADAR"),
    ("STA", "STRAIGHT-IN APPROACH"),
    ("STAR", "STANDARD TERMINAL ARRIVAL"),
    ("STBY", "STANDBY"),
    ("STNR", "STATIONARY"),
    ("SUN", "SUNDAY"),
    ("SVC", "SERVICE"),
    ("SW", "SOUTHWEST"),
    ("T", "TEMPERATURE"),
    ("TACAN", "TACTICAL AIR NAVIGATIONAL AID"),
    ("TAR", "TERMINAL AREA SURVEILLANCE RADAR"),
    ("TDZ", "TOUCHDOWN ZONE"),
    ("TEMPO", "TEMPORARY"),
    ("TFC", "TRAFFIC"),
    ("TFR", "TEMPORARY FLIGHT RESTRICTION"),
    ("TGL", "TOUCH AND GO LANDINGS"),
    ("THN", "THIN"),
    ("THR", "THRESHOLD"),
    ("THRU", "THROUGH"),
    ("THU", "THURSDAY"),
    ("TIL", "UNTIL"),
    ("TKOF", "TAKEOFF"),
    ("TM", "TRAFFIC MANAGEMENT"),
    ("TMPRY", "TEMPORARY"),
    ("TRML", "TERMINAL"),
    ("TRNG", "TRAINING"),
    ("TRSN", "TRANSITION"),
    ("TSNT", "TRANSIENT"),
    ("TUE", "TUESDAY"),
    ("TWR", "TOWER"),
    ("TWY", "TAXIWAY"),
    ("TWYL", "TAXIWAY LINK"),
    ("U/S", "UNSERVICEABLE"),
    ("UAV", "UNMANNED AIR VEHICLES"),
    ("UFN", "UNTIL FURTHER NOTICE"),
    ("UNAVBL", "UNAVAILABLE"),
    ("UNICOM", "AERONAUTICAL ADVISORY STATION"),
    ("UNL", "UNLIMITED"),
    ("UNLGTD", "UNLIGHTED"),
    ("UNMKD", "UNMARKED"),
    ("UNMNT", "UNMONITORED"),
    ("UNREL", "UNRELIABLE"),
    ("UNUSBL", "UNUSABLE"),
    ("UTC", "COORDINATED UNIVERSAL TIME"),
    ("VASI", "VISUAL APPROACH SLOPE INDICATOR"),
    ("VDP", "VISUAL DESCENT POINT"),
    ("VFR", "VISUAL FLIGHT RULES"),
    ("VGSI", "VISUAL GLIDE SLOPE INDICATOR"),
    ("VIA", "BY WAY OF"),
    ("VICE", "INSTEAD"),
    ("VIS", "VISIBILITY"),
    ("VMC", "VISUAL METEOROLOGICAL CONDITIONS"),
    ("VOL", "VOLUME"),
    ("VOR", "VHF OMNI-DIRECTIONAL RADIO RANGE"),
    ("VORTAC", "VOR AND TACAN"),
    ("W", "WEST"),
    ("WB", "WESTBOUND"),
    ("WED", "WEDNESDAY"),
    ("WEF", "WITH EFFECT FROM"),
    ("WI", "WITHIN"),
    ("WIE", "WITH IMMEDIATE EFFECT"),
    ("WKDAYS", "MONDAY THROUGH FRIDAY"),
    ("WKEND", "SATURDAY AND SUNDAY"),
    ("WND", "WIND"),
    ("WPT", "WAYPOINT"),
    ("WRNG", "WARNING"),
    ("WSR", "WET SNOW ON RUNWAY"),
    ("WTR", "WATER ON RUNWAY"),
    ("WX", "WEATHER"),
    ("XNG", "CROSSING"),
];
