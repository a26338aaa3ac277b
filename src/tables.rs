//! Built-in Tennessee reference tables for region classification.
//!
//! Each table is an ordered list of `(pattern, region)` pairs scanned
//! top-to-bottom, first match wins. Precedence between entries is therefore
//! part of the table contract, not an accident of map insertion order: where
//! one pattern contains another ("Memphis-Shelby County Schools" vs
//! "Shelby County Schools"), the more specific entry must come first.
//!
//! The tables are expected to need ongoing curation. Names that no table
//! entry matches surface in the report as region "Other"; auditing
//! `meta.by_region` is the intended way to spot entries worth adding.

use crate::models::Region;

/// Known districts, private schools, colleges, and abbreviations.
///
/// Highest-specificity table: consulted first for an exact (case-sensitive)
/// name match, then for a case-insensitive substring match in both
/// directions. A few entries exist purely to pre-empt county-layer
/// substring collisions and are marked as such.
pub const DISTRICT_REGIONS: &[(&str, Region)] = &[
    // Middle Tennessee districts
    ("Metro Nashville Public Schools", Region::Middle),
    ("MNPS", Region::Middle),
    ("Williamson County Schools", Region::Middle),
    ("Rutherford County Schools", Region::Middle),
    ("Murfreesboro City Schools", Region::Middle),
    ("Wilson County Schools", Region::Middle),
    ("Lebanon Special School District", Region::Middle),
    ("Sumner County Schools", Region::Middle),
    ("Maury County Public Schools", Region::Middle),
    ("Clarksville-Montgomery County School System", Region::Middle),
    ("CMCSS", Region::Middle),
    ("Franklin Special School District", Region::Middle),
    // "Hendersonville" would otherwise hit Henderson County (West) at the
    // county layer.
    ("Hendersonville", Region::Middle),
    // East Tennessee districts
    ("Knox County Schools", Region::East),
    ("Hamilton County Schools", Region::East),
    ("Johnson City Schools", Region::East),
    ("Kingsport City Schools", Region::East),
    ("Bristol Tennessee City Schools", Region::East),
    ("Oak Ridge Schools", Region::East),
    ("Maryville City Schools", Region::East),
    ("Alcoa City Schools", Region::East),
    ("Cleveland City Schools", Region::East),
    // West Tennessee districts
    ("Memphis-Shelby County Schools", Region::West),
    ("MSCS", Region::West),
    ("Shelby County Schools", Region::West),
    ("Jackson-Madison County School System", Region::West),
    ("JMCSS", Region::West),
    ("Germantown Municipal School District", Region::West),
    ("Collierville Schools", Region::West),
    ("Bartlett City Schools", Region::West),
    ("Arlington Community Schools", Region::West),
    ("Lakeland School System", Region::West),
    ("Millington Municipal Schools", Region::West),
    ("Dyersburg City Schools", Region::West),
    // "Union City" would otherwise hit Union County (East).
    ("Union City Schools", Region::West),
    // "Scotts Hill" would otherwise hit Scott County (East).
    ("Scotts Hill", Region::West),
    // Private schools
    ("Montgomery Bell Academy", Region::Middle),
    ("Father Ryan High School", Region::Middle),
    ("Brentwood Academy", Region::Middle),
    ("Baylor School", Region::East),
    ("McCallie School", Region::East),
    ("Webb School of Knoxville", Region::East),
    ("Memphis University School", Region::West),
    ("Briarcrest Christian School", Region::West),
    // Colleges and universities
    ("Vanderbilt University", Region::Middle),
    ("Belmont University", Region::Middle),
    ("Lipscomb University", Region::Middle),
    ("Tennessee State University", Region::Middle),
    ("Middle Tennessee State University", Region::Middle),
    ("MTSU", Region::Middle),
    ("Tennessee Tech University", Region::Middle),
    ("Austin Peay State University", Region::Middle),
    ("University of Tennessee at Chattanooga", Region::East),
    ("UTC", Region::East),
    ("University of Tennessee", Region::East),
    ("East Tennessee State University", Region::East),
    ("ETSU", Region::East),
    ("University of Memphis", Region::West),
    ("Rhodes College", Region::West),
    ("Christian Brothers University", Region::West),
    ("Union University", Region::West),
];

/// All 95 Tennessee counties grouped by grand division.
///
/// Matched as a case-insensitive substring of the organization name, so a
/// bare county name inside "Cheatham County Schools" or "Maury County
/// Public Schools" is enough.
pub const COUNTY_REGIONS: &[(&str, Region)] = &[
    // East Tennessee
    ("Anderson", Region::East),
    ("Bledsoe", Region::East),
    ("Blount", Region::East),
    ("Bradley", Region::East),
    ("Campbell", Region::East),
    ("Carter", Region::East),
    ("Claiborne", Region::East),
    ("Cocke", Region::East),
    ("Cumberland", Region::East),
    ("Grainger", Region::East),
    ("Greene", Region::East),
    ("Hamblen", Region::East),
    ("Hamilton", Region::East),
    ("Hancock", Region::East),
    ("Hawkins", Region::East),
    ("Jefferson", Region::East),
    ("Johnson", Region::East),
    ("Knox", Region::East),
    ("Loudon", Region::East),
    ("Marion", Region::East),
    ("McMinn", Region::East),
    ("Meigs", Region::East),
    ("Monroe", Region::East),
    ("Morgan", Region::East),
    ("Polk", Region::East),
    ("Rhea", Region::East),
    ("Roane", Region::East),
    ("Scott", Region::East),
    ("Sequatchie", Region::East),
    ("Sevier", Region::East),
    ("Sullivan", Region::East),
    ("Unicoi", Region::East),
    ("Union", Region::East),
    ("Washington", Region::East),
    // Middle Tennessee
    ("Bedford", Region::Middle),
    ("Cannon", Region::Middle),
    ("Cheatham", Region::Middle),
    ("Clay", Region::Middle),
    ("Coffee", Region::Middle),
    ("Davidson", Region::Middle),
    ("DeKalb", Region::Middle),
    ("Dickson", Region::Middle),
    ("Fentress", Region::Middle),
    ("Franklin", Region::Middle),
    ("Giles", Region::Middle),
    ("Grundy", Region::Middle),
    ("Hickman", Region::Middle),
    ("Houston", Region::Middle),
    ("Humphreys", Region::Middle),
    ("Jackson", Region::Middle),
    ("Lawrence", Region::Middle),
    ("Lewis", Region::Middle),
    ("Lincoln", Region::Middle),
    ("Macon", Region::Middle),
    ("Marshall", Region::Middle),
    ("Maury", Region::Middle),
    ("Montgomery", Region::Middle),
    ("Moore", Region::Middle),
    ("Overton", Region::Middle),
    ("Perry", Region::Middle),
    ("Pickett", Region::Middle),
    ("Putnam", Region::Middle),
    ("Robertson", Region::Middle),
    ("Rutherford", Region::Middle),
    ("Smith", Region::Middle),
    ("Stewart", Region::Middle),
    ("Sumner", Region::Middle),
    ("Trousdale", Region::Middle),
    ("Van Buren", Region::Middle),
    ("Warren", Region::Middle),
    ("Wayne", Region::Middle),
    ("White", Region::Middle),
    ("Williamson", Region::Middle),
    ("Wilson", Region::Middle),
    // West Tennessee
    ("Benton", Region::West),
    ("Carroll", Region::West),
    ("Chester", Region::West),
    ("Crockett", Region::West),
    ("Decatur", Region::West),
    ("Dyer", Region::West),
    ("Fayette", Region::West),
    ("Gibson", Region::West),
    ("Hardeman", Region::West),
    ("Hardin", Region::West),
    ("Haywood", Region::West),
    ("Henderson", Region::West),
    ("Henry", Region::West),
    ("Lake", Region::West),
    ("Lauderdale", Region::West),
    ("Madison", Region::West),
    ("McNairy", Region::West),
    ("Obion", Region::West),
    ("Shelby", Region::West),
    ("Tipton", Region::West),
    ("Weakley", Region::West),
];

/// Larger cities, for names that carry a city rather than a county or a
/// known district ("Some School Near Memphis"). Lowest-priority layer.
pub const CITY_REGIONS: &[(&str, Region)] = &[
    // Middle Tennessee
    ("Nashville", Region::Middle),
    ("Murfreesboro", Region::Middle),
    ("Franklin", Region::Middle),
    ("Clarksville", Region::Middle),
    ("Brentwood", Region::Middle),
    ("Columbia", Region::Middle),
    ("Gallatin", Region::Middle),
    ("Lebanon", Region::Middle),
    ("Cookeville", Region::Middle),
    ("Smyrna", Region::Middle),
    ("La Vergne", Region::Middle),
    ("Spring Hill", Region::Middle),
    ("Shelbyville", Region::Middle),
    ("Tullahoma", Region::Middle),
    ("Dickson", Region::Middle),
    // East Tennessee
    ("Knoxville", Region::East),
    ("Chattanooga", Region::East),
    ("Johnson City", Region::East),
    ("Kingsport", Region::East),
    ("Bristol", Region::East),
    ("Morristown", Region::East),
    ("Maryville", Region::East),
    ("Oak Ridge", Region::East),
    ("Cleveland", Region::East),
    ("Sevierville", Region::East),
    ("Greeneville", Region::East),
    ("Elizabethton", Region::East),
    ("Athens", Region::East),
    ("Alcoa", Region::East),
    // West Tennessee
    ("Memphis", Region::West),
    ("Jackson", Region::West),
    ("Dyersburg", Region::West),
    ("Union City", Region::West),
    ("Martin", Region::West),
    ("Bartlett", Region::West),
    ("Collierville", Region::West),
    ("Germantown", Region::West),
    ("Millington", Region::West),
    ("Bolivar", Region::West),
    ("Paris", Region::West),
    ("Humboldt", Region::West),
    ("Milan", Region::West),
    ("Brownsville", Region::West),
];
