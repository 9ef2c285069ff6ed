//! Built-in registry records.

use super::entry::{CatalogEntry, CategoryStatus, Maintenance};

pub(super) const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "frying-pan",
        category: "Frying Pan",
        status: CategoryStatus::Declared,
        model: Some("Lodge 12 in Cast Iron Skillet (L10SK3)"),
        price: Some("$30-40"),
        form_definition: "12-inch cast iron with 3-4mm walls.",
        core_reasoning: "Inert material. Seasoning improves with use. Rust/cracks repairable.",
        key_disqualifiers: "Non-stick coatings. Stainless steel hot spots.",
        maintenance: Maintenance::Repairable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "refrigerator",
        category: "Refrigerator",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Cold storage with replaceable mechanical heart.",
        core_reasoning: "Sealed compressor systems and electronic control boards fail unpredictably.",
        key_disqualifiers: "Sealed systems. Integrated insulation.",
        maintenance: Maintenance::Disposable,
        lifespan: "7-12 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "hammer",
        category: "Hammer",
        status: CategoryStatus::Declared,
        model: Some("Estwing E3-16C"),
        price: Some("$35"),
        form_definition: "Single-piece drop-forged steel.",
        core_reasoning: "Head cannot separate from handle. Face heat-treated 50 HRC.",
        key_disqualifiers: "Wood handles (break). Fiberglass (bond fails).",
        maintenance: Maintenance::Repairable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "smartphone",
        category: "Smartphone",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Communication device resistant to obsolescence.",
        core_reasoning: "Glued batteries and software support windows force replacement.",
        key_disqualifiers: "Sealed construction. Locked bootloaders.",
        maintenance: Maintenance::Consumable,
        lifespan: "3-4 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "kitchen-knife",
        category: "Kitchen Knife",
        status: CategoryStatus::Declared,
        model: Some("Victorinox Fibrox Chef's Knife"),
        price: Some("$45"),
        form_definition: "High-carbon stainless steel, full tang.",
        core_reasoning: "Utilitarian perfection. Fibrox handle won't delaminate. Sharpenable.",
        key_disqualifiers: "Ceramics (brittle). Carbon steel (rusts).",
        maintenance: Maintenance::Durable,
        lifespan: "20+ years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "washing-machine",
        category: "Washing Machine",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Laundry device with mechanical controls.",
        core_reasoning: "Electronic boards and sealed bearings force disposal over repair.",
        key_disqualifiers: "Electronic controls. Sealed transmissions.",
        maintenance: Maintenance::Disposable,
        lifespan: "5-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "saucepan",
        category: "Saucepan",
        status: CategoryStatus::Declared,
        model: Some("Tramontina Tri-Ply Clad"),
        price: Some("$70"),
        form_definition: "Clad stainless steel with welded handles.",
        core_reasoning: "Even heating. No rivets. Indefinite thermal cycling.",
        key_disqualifiers: "Non-stick. Single-ply.",
        maintenance: Maintenance::Durable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "screwdriver",
        category: "Screwdriver",
        status: CategoryStatus::Declared,
        model: Some("Wiha SoftFinish Phillips"),
        price: Some("$18"),
        form_definition: "Hardened steel shaft, molded handle.",
        core_reasoning: "Handle molded to shaft. Precision tip reduces cam-out.",
        key_disqualifiers: "Soft tips. Multi-bit wobble.",
        maintenance: Maintenance::Durable,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "dutch-oven",
        category: "Dutch Oven",
        status: CategoryStatus::Declared,
        model: Some("Lodge Enameled Cast Iron"),
        price: Some("$80"),
        form_definition: "Enameled cast iron vessel.",
        core_reasoning: "95% performance of Le Creuset at 20% cost.",
        key_disqualifiers: "Bare iron (reactive). Stainless (poor retention).",
        maintenance: Maintenance::Durable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "laptop",
        category: "Laptop",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Portable computer with replaceable battery.",
        core_reasoning: "Glued batteries and soldered RAM prevent indefinite use.",
        key_disqualifiers: "Soldered RAM. Glued battery.",
        maintenance: Maintenance::Obsolete,
        lifespan: "5 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "coffee-maker",
        category: "Coffee Maker",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Extraction device without sealed elements.",
        core_reasoning: "Drip/Espresso machines fail (scale/electronics).",
        key_disqualifiers: "Internal scale. Electronic failure.",
        maintenance: Maintenance::Repairable,
        lifespan: "Varies",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "drill",
        category: "Drill",
        status: CategoryStatus::Declared,
        model: Some("Makita 6302H Corded"),
        price: Some("$180"),
        form_definition: "Grid-powered rotary tool.",
        core_reasoning: "Eliminates battery obsolescence. Metal gearbox.",
        key_disqualifiers: "Cordless (battery death).",
        maintenance: Maintenance::Warranty,
        lifespan: "20+ years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "kettle",
        category: "Kettle",
        status: CategoryStatus::Declared,
        model: Some("OXO Classic Stovetop"),
        price: Some("$40"),
        form_definition: "Welded stainless boiling vessel.",
        core_reasoning: "No heating element. Simple physics.",
        key_disqualifiers: "Electric (element failure). Glass (fragile).",
        maintenance: Maintenance::Consumable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "task-chair",
        category: "Task Chair",
        status: CategoryStatus::SplitRequired,
        model: None,
        price: None,
        form_definition: "Ergonomic work seating.",
        core_reasoning: "New market irrational; Used market viable.",
        key_disqualifiers: "Bonded leather. Compressed foam.",
        maintenance: Maintenance::Unknown,
        lifespan: "N/A",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "toaster",
        category: "Toaster",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Resistance heating with replaceable elements.",
        core_reasoning: "Nichrome wire oxidizes. Elements non-replaceable.",
        key_disqualifiers: "Sealed chassis. Electronic timers.",
        maintenance: Maintenance::Disposable,
        lifespan: "3-7 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "backpack",
        category: "Backpack",
        status: CategoryStatus::Declared,
        model: Some("Tom Bihn Synik"),
        price: Some("$325"),
        form_definition: "Ballistic nylon container, YKK zippers.",
        core_reasoning: "Materials outlast user. Repairable zippers.",
        key_disqualifiers: "Coated fabric delamination.",
        maintenance: Maintenance::Warranty,
        lifespan: "15-20 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "mattress",
        category: "Mattress",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Sleep surface with replaceable components.",
        core_reasoning: "Foams compress permanently. Sealed construction.",
        key_disqualifiers: "Memory foam. Sewn covers.",
        maintenance: Maintenance::Consumable,
        lifespan: "7-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "hand-saw",
        category: "Hand Saw",
        status: CategoryStatus::Declared,
        model: Some("Gyokucho Razorsaw"),
        price: Some("$50"),
        form_definition: "Pull saw with replaceable blade.",
        core_reasoning: "Acknowledges blade as consumable.",
        key_disqualifiers: "Disposable western saws.",
        maintenance: Maintenance::Repairable,
        lifespan: "Blade 2-5 yrs",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "desk",
        category: "Desk",
        status: CategoryStatus::Declared,
        model: Some("Solid Wood Block + Legs"),
        price: Some("$600"),
        form_definition: "Solid timber slab on mechanical legs.",
        core_reasoning: "Refinishable. No veneer to peel.",
        key_disqualifiers: "Particleboard.",
        maintenance: Maintenance::Durable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "boots",
        category: "Boots",
        status: CategoryStatus::Declared,
        model: Some("White's Semi-Dress"),
        price: Some("$500"),
        form_definition: "Goodyear welted full-grain leather.",
        core_reasoning: "Stitched sole allows indefinite rebuilding.",
        key_disqualifiers: "Cemented soles. Synthetic liners.",
        maintenance: Maintenance::Repairable,
        lifespan: "Resoling 5-10 yrs",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "oven-range",
        category: "Oven/Range",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Cooking appliance with mechanical gas.",
        core_reasoning: "Electronic control boards fail.",
        key_disqualifiers: "Electronic controls. Sealed burners.",
        maintenance: Maintenance::Disposable,
        lifespan: "10-15 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "belt",
        category: "Belt",
        status: CategoryStatus::Declared,
        model: Some("Full Grain Leather Belt"),
        price: Some("$70"),
        form_definition: "Single strip full-grain leather.",
        core_reasoning: "No stitching to fail. Mechanical buckle.",
        key_disqualifiers: "Bonded leather. Stitched edges.",
        maintenance: Maintenance::Repairable,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "freezer",
        category: "Freezer",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Cold storage with serviceable mechanicals.",
        core_reasoning: "Sealed systems make repair irrational.",
        key_disqualifiers: "Sealed compressors.",
        maintenance: Maintenance::Disposable,
        lifespan: "10-15 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "adjustable-wrench",
        category: "Adjustable Wrench",
        status: CategoryStatus::Declared,
        model: Some("Bahco Adjustable"),
        price: Some("$35"),
        form_definition: "Forged steel with precision worm gear.",
        core_reasoning: "Tight tolerances reduce rounding.",
        key_disqualifiers: "Stamped steel. Loose jaw play.",
        maintenance: Maintenance::Durable,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "t-shirt",
        category: "T-Shirt",
        status: CategoryStatus::Declared,
        model: Some("Velva Sheen 2-Pack"),
        price: Some("$40"),
        form_definition: "Tubular knit cotton.",
        core_reasoning: "No side seams to twist. Heavyweight cotton.",
        key_disqualifiers: "Thin fabric. Side seams.",
        maintenance: Maintenance::Consumable,
        lifespan: "3-5 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "jeans",
        category: "Jeans",
        status: CategoryStatus::Declared,
        model: Some("Levi's 501 STF"),
        price: Some("$60"),
        form_definition: "100% cotton denim, button fly.",
        core_reasoning: "No elastane to fail. Button fly repairable.",
        key_disqualifiers: "Stretch denim. Zippers.",
        maintenance: Maintenance::Durable,
        lifespan: "5-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "jacket",
        category: "Jacket/Coat",
        status: CategoryStatus::Declared,
        model: Some("Barbour Beaufort"),
        price: Some("$400"),
        form_definition: "Waxed cotton canvas.",
        core_reasoning: "Rewaxable. No membrane to delaminate.",
        key_disqualifiers: "Gore-tex (delaminates).",
        maintenance: Maintenance::Repairable,
        lifespan: "Rewax 1-2 yrs",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "chisel",
        category: "Chisel",
        status: CategoryStatus::Declared,
        model: Some("Narex Richter"),
        price: Some("$70"),
        form_definition: "Through-tang high-carbon steel.",
        core_reasoning: "Tang prevents handle separation.",
        key_disqualifiers: "Socket chisels. Plastic handles.",
        maintenance: Maintenance::Durable,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "pliers",
        category: "Pliers",
        status: CategoryStatus::Declared,
        model: Some("Channellock 430"),
        price: Some("$25"),
        form_definition: "Drop-forged steel tongue-and-groove.",
        core_reasoning: "Simple mechanical joint.",
        key_disqualifiers: "Push-button. Soft steel.",
        maintenance: Maintenance::Durable,
        lifespan: "Lifetime",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "tape-measure",
        category: "Tape Measure",
        status: CategoryStatus::Declared,
        model: Some("Stanley FatMax"),
        price: Some("$25"),
        form_definition: "1.25 in blade width, mylar coating.",
        core_reasoning: "Wide blade prevents kinking.",
        key_disqualifiers: "Thin blades. Plastic locks.",
        maintenance: Maintenance::Repairable,
        lifespan: "5-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "tent",
        category: "Tent",
        status: CategoryStatus::Declared,
        model: Some("Springbar Highline"),
        price: Some("$700"),
        form_definition: "100% cotton canvas, steel frame.",
        core_reasoning: "Canvas treats with water to seal.",
        key_disqualifiers: "Nylon (PU coatings).",
        maintenance: Maintenance::Repairable,
        lifespan: "Treat 3-5 yrs",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "sleeping-bag",
        category: "Sleeping Bag",
        status: CategoryStatus::Declared,
        model: Some("Western Mountaineering"),
        price: Some("$650"),
        form_definition: "850+ down fill, continuous baffles.",
        core_reasoning: "Down outlasts synthetic.",
        key_disqualifiers: "Synthetic fill.",
        maintenance: Maintenance::Warranty,
        lifespan: "15-20 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "water-bottle",
        category: "Water Bottle",
        status: CategoryStatus::Declared,
        model: Some("Klean Kanteen Single-Wall"),
        price: Some("$30"),
        form_definition: "18/8 stainless steel, unlined.",
        core_reasoning: "Single wall cannot fail.",
        key_disqualifiers: "Vacuum insulated. Plastic.",
        maintenance: Maintenance::Repairable,
        lifespan: "Indefinite",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "flashlight",
        category: "Flashlight",
        status: CategoryStatus::Declared,
        model: Some("Maglite 2D LED"),
        price: Some("$35"),
        form_definition: "Aluminum body, alkaline power.",
        core_reasoning: "Commodity batteries. Replaceable switch.",
        key_disqualifiers: "Proprietary lithium.",
        maintenance: Maintenance::Warranty,
        lifespan: "7 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "sweater",
        category: "Sweater",
        status: CategoryStatus::Declared,
        model: Some("Aran Cable Knit"),
        price: Some("$100"),
        form_definition: "100% wool, cable knit.",
        core_reasoning: "Structure resists stretching.",
        key_disqualifiers: "Acrylic. Cotton.",
        maintenance: Maintenance::Repairable,
        lifespan: "15-25 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "cooler",
        category: "Cooler",
        status: CategoryStatus::Declared,
        model: Some("RTIC 45-Quart"),
        price: Some("$200"),
        form_definition: "Rotomolded polyethylene.",
        core_reasoning: "One-piece tub. Replaceable parts.",
        key_disqualifiers: "Blow-molded plastic.",
        maintenance: Maintenance::Repairable,
        lifespan: "20-30 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "pocket-knife",
        category: "Pocket Knife",
        status: CategoryStatus::Declared,
        model: Some("Opinel No. 8"),
        price: Some("$18"),
        form_definition: "Ring-lock folding knife.",
        core_reasoning: "5 components. Wear-compensating lock.",
        key_disqualifiers: "Springs. Rivets.",
        maintenance: Maintenance::Repairable,
        lifespan: "20-30 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "notebook",
        category: "Notebook",
        status: CategoryStatus::Declared,
        model: Some("Mead Composition"),
        price: Some("$3"),
        form_definition: "Sewn binding signatures.",
        core_reasoning: "Pages cannot fall out.",
        key_disqualifiers: "Spiral. Glued.",
        maintenance: Maintenance::Durable,
        lifespan: "Archival",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "pen",
        category: "Pen",
        status: CategoryStatus::Declared,
        model: Some("Parker Jotter"),
        price: Some("$15"),
        form_definition: "Stainless steel body.",
        core_reasoning: "Metal body lasts indefinitely.",
        key_disqualifiers: "Plastic. Disposable.",
        maintenance: Maintenance::Repairable,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "cutting-board",
        category: "Cutting Board",
        status: CategoryStatus::Declared,
        model: Some("John Boos Maple"),
        price: Some("$80"),
        form_definition: "Hard maple, edge-grain.",
        core_reasoning: "Antimicrobial. Sandable.",
        key_disqualifiers: "Plastic. Glass.",
        maintenance: Maintenance::Durable,
        lifespan: "Oil 3-6 mos",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "vacuum",
        category: "Vacuum Cleaner",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Suction device with serviceable motor.",
        core_reasoning: "Sealed motors fail. Bagless clogs.",
        key_disqualifiers: "Bagless. Sealed motor.",
        maintenance: Maintenance::Empty,
        lifespan: "5-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "bicycle",
        category: "Bicycle",
        status: CategoryStatus::Declared,
        model: Some("Surly Long Haul Trucker"),
        price: Some("$1500"),
        form_definition: "Chromoly steel frame.",
        core_reasoning: "Steel frame weldable. Standard parts.",
        key_disqualifiers: "Carbon fiber. Electronic shifting.",
        maintenance: Maintenance::Repairable,
        lifespan: "Indefinite",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "dining-chair",
        category: "Dining Chair",
        status: CategoryStatus::Declared,
        model: Some("Vermont Woods Windsor"),
        price: Some("$450"),
        form_definition: "Solid hardwood, mechanical joinery.",
        core_reasoning: "No glue-only joints.",
        key_disqualifiers: "Upholstery. Particleboard.",
        maintenance: Maintenance::Consumable,
        lifespan: "15-20 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "printer",
        category: "Printer",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Printing device with non-DRM consumables.",
        core_reasoning: "Inkjet clogs. DRM ink.",
        key_disqualifiers: "DRM. Obsolescence.",
        maintenance: Maintenance::Empty,
        lifespan: "3-12 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "socks",
        category: "Socks",
        status: CategoryStatus::Declared,
        model: Some("Darn Tough Merino"),
        price: Some("$25"),
        form_definition: "Merino wool blend.",
        core_reasoning: "Lifetime warranty.",
        key_disqualifiers: "Cotton. No warranty.",
        maintenance: Maintenance::Warranty,
        lifespan: "2-5 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "watch",
        category: "Watch",
        status: CategoryStatus::Declared,
        model: Some("Seiko SNK809"),
        price: Some("$100"),
        form_definition: "Mechanical automatic.",
        core_reasoning: "No battery. Serviceable.",
        key_disqualifiers: "Smartwatch. Quartz.",
        maintenance: Maintenance::Repairable,
        lifespan: "10-15 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "shoes",
        category: "Shoes",
        status: CategoryStatus::Declared,
        model: Some("Allen Edmonds Park Ave"),
        price: Some("$400"),
        form_definition: "Goodyear welted leather.",
        core_reasoning: "Stitched sole.",
        key_disqualifiers: "Cemented. Foam.",
        maintenance: Maintenance::Repairable,
        lifespan: "3-7 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "food-storage",
        category: "Food Storage",
        status: CategoryStatus::SplitRequired,
        model: None,
        price: None,
        form_definition: "Inert container.",
        core_reasoning: "Glass lasts, lids fail.",
        key_disqualifiers: "Plastic.",
        maintenance: Maintenance::Unknown,
        lifespan: "3-7 years",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "level",
        category: "Level",
        status: CategoryStatus::Declared,
        model: Some("Stabila Type 196"),
        price: Some("$100"),
        form_definition: "Heavy aluminum profile.",
        core_reasoning: "Locked vials.",
        key_disqualifiers: "Plastic. Adjustable.",
        maintenance: Maintenance::Warranty,
        lifespan: "Lifetime",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "drill-bits",
        category: "Drill Bits",
        status: CategoryStatus::Declared,
        model: Some("Viking HSS Jobber"),
        price: Some("$5"),
        form_definition: "High Speed Steel.",
        core_reasoning: "Sharpenable.",
        key_disqualifiers: "Carbide tipped.",
        maintenance: Maintenance::Repairable,
        lifespan: "5-20 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "extension-cord",
        category: "Extension Cord",
        status: CategoryStatus::Declared,
        model: Some("US Wire 12/3"),
        price: Some("$60"),
        form_definition: "12-gauge copper.",
        core_reasoning: "Prevents voltage drop.",
        key_disqualifiers: "16-gauge.",
        maintenance: Maintenance::Repairable,
        lifespan: "15-25 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "camping-stove",
        category: "Camping Stove",
        status: CategoryStatus::Declared,
        model: Some("MSR WhisperLite"),
        price: Some("$110"),
        form_definition: "Liquid fuel, pump.",
        core_reasoning: "Field maintainable.",
        key_disqualifiers: "Canister. Piezo.",
        maintenance: Maintenance::Repairable,
        lifespan: "2-5 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "mechanical-pencil",
        category: "Mechanical Pencil",
        status: CategoryStatus::Declared,
        model: Some("Pentel GraphGear 500"),
        price: Some("$6"),
        form_definition: "Metal grip, 0.7mm.",
        core_reasoning: "Simple mechanism.",
        key_disqualifiers: "Plastic clutch.",
        maintenance: Maintenance::Repairable,
        lifespan: "5-10 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "umbrella",
        category: "Umbrella",
        status: CategoryStatus::Declared,
        model: Some("GustBuster Classic"),
        price: Some("$45"),
        form_definition: "Double canopy.",
        core_reasoning: "Wind release vents.",
        key_disqualifiers: "Aluminum ribs.",
        maintenance: Maintenance::Warranty,
        lifespan: "5-10 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "ladder",
        category: "Ladder",
        status: CategoryStatus::Declared,
        model: Some("Werner Fiberglass"),
        price: Some("$150"),
        form_definition: "Fiberglass rails.",
        core_reasoning: "Non-conductive.",
        key_disqualifiers: "Aluminum.",
        maintenance: Maintenance::Repairable,
        lifespan: "20-30 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "wheelbarrow",
        category: "Wheelbarrow",
        status: CategoryStatus::Declared,
        model: Some("Jackson Steel"),
        price: Some("$130"),
        form_definition: "Steel tray.",
        core_reasoning: "Doesn't crack.",
        key_disqualifiers: "Plastic tray.",
        maintenance: Maintenance::Repairable,
        lifespan: "2-3 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "wallet",
        category: "Wallet",
        status: CategoryStatus::Declared,
        model: Some("Saddleback Leather"),
        price: Some("$50"),
        form_definition: "Full-grain leather.",
        core_reasoning: "No tearing.",
        key_disqualifiers: "Bonded leather.",
        maintenance: Maintenance::Warranty,
        lifespan: "2-5 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "briefcase",
        category: "Briefcase",
        status: CategoryStatus::Declared,
        model: Some("Filson Original"),
        price: Some("$325"),
        form_definition: "Rugged Twill.",
        core_reasoning: "Heavy canvas.",
        key_disqualifiers: "Nylon.",
        maintenance: Maintenance::Repairable,
        lifespan: "Rewax 2-3 yrs",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "hat",
        category: "Hat",
        status: CategoryStatus::Declared,
        model: Some("Tilley T5"),
        price: Some("$85"),
        form_definition: "Cotton duck.",
        core_reasoning: "Guaranteed for life.",
        key_disqualifiers: "Straw. Felt.",
        maintenance: Maintenance::Warranty,
        lifespan: "15-25 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "gloves",
        category: "Gloves",
        status: CategoryStatus::Declared,
        model: Some("Dachstein Wool"),
        price: Some("$70"),
        form_definition: "Boiled wool.",
        core_reasoning: "Windproof.",
        key_disqualifiers: "Synthetic.",
        maintenance: Maintenance::Repairable,
        lifespan: "1-3 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "toothbrush",
        category: "Toothbrush",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Oral hygiene.",
        core_reasoning: "Consumable.",
        key_disqualifiers: "Electric.",
        maintenance: Maintenance::Repairable,
        lifespan: "3-4 months",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "razor",
        category: "Razor",
        status: CategoryStatus::Declared,
        model: Some("Merkur 34C"),
        price: Some("$45"),
        form_definition: "Brass safety razor.",
        core_reasoning: "Solid brass.",
        key_disqualifiers: "Cartridge.",
        maintenance: Maintenance::Repairable,
        lifespan: "10-year",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "hair-dryer",
        category: "Hair Dryer",
        status: CategoryStatus::Empty,
        model: None,
        price: None,
        form_definition: "Heated blower.",
        core_reasoning: "Elements oxidize.",
        key_disqualifiers: "Sealed.",
        maintenance: Maintenance::Empty,
        lifespan: "2-15 years",
        confidence: 4,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "desktop-computer",
        category: "Desktop Computer",
        status: CategoryStatus::Candidate,
        model: Some("Custom ATX"),
        price: Some("$1200"),
        form_definition: "ATX architecture.",
        core_reasoning: "Repairable.",
        key_disqualifiers: "Proprietary.",
        maintenance: Maintenance::Repairable,
        lifespan: "5-10 years",
        confidence: 2,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "task-chair-new",
        category: "Task Chair (New)",
        status: CategoryStatus::Candidate,
        model: None,
        price: None,
        form_definition: "New chair.",
        core_reasoning: "Unproven.",
        key_disqualifiers: "Foam.",
        maintenance: Maintenance::Unknown,
        lifespan: "15+ years",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "task-chair-used",
        category: "Task Chair (Used)",
        status: CategoryStatus::Candidate,
        model: None,
        price: None,
        form_definition: "Used chair.",
        core_reasoning: "Proven.",
        key_disqualifiers: "None.",
        maintenance: Maintenance::Unknown,
        lifespan: "Decades",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "food-storage-glass",
        category: "Food Storage (Glass)",
        status: CategoryStatus::Candidate,
        model: None,
        price: None,
        form_definition: "Glass.",
        core_reasoning: "Lids fail.",
        key_disqualifiers: "Plastic.",
        maintenance: Maintenance::Unknown,
        lifespan: "10+ years",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
    CatalogEntry {
        id: "food-storage-dry",
        category: "Food Storage (Dry)",
        status: CategoryStatus::Candidate,
        model: None,
        price: None,
        form_definition: "Dry goods.",
        core_reasoning: "Seal.",
        key_disqualifiers: "Integrated.",
        maintenance: Maintenance::Unknown,
        lifespan: "Years",
        confidence: 3,
        last_reviewed: "2026-01-16",
    },
];
