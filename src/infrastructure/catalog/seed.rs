//! Built-in municipal dataset.

use crate::domain::{
    Business, DirectoryContact, GuideOffice, HubKind, MenuItem, ServiceGuide, TransportHub,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn image(slug: &str) -> Option<String> {
    Some(format!("https://images.citizen-services.example/{slug}.jpg"))
}

// ============================================================================
// Ordering
// ============================================================================

pub(super) fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: "al-nakheel-grill".into(),
            name: "Al Nakheel Grill".into(),
            cuisine: "Middle Eastern".into(),
            description: "Charcoal grills, wraps and mezze from the old market".into(),
            address: "14 Souq Street, Old Town".into(),
            phone: "+966 11 400 1200".into(),
            rating: 4.6,
            delivery_fee_cents: 500,
            min_order_cents: 1500,
            is_open: true,
            image_url: image("al-nakheel-grill"),
            tags: strings(&["grill", "family", "halal"]),
        },
        Business {
            id: "bella-napoli".into(),
            name: "Bella Napoli".into(),
            cuisine: "Italian".into(),
            description: "Wood-fired oven and fresh pasta".into(),
            address: "3 Corniche Road, Marina District".into(),
            phone: "+966 11 400 3300".into(),
            rating: 4.5,
            delivery_fee_cents: 300,
            min_order_cents: 2000,
            is_open: true,
            image_url: image("bella-napoli"),
            tags: strings(&["wood fired", "date night"]),
        },
        Business {
            id: "green-bowl".into(),
            name: "Green Bowl".into(),
            cuisine: "Healthy".into(),
            description: "Grain bowls, salads and smoothies".into(),
            address: "27 University Avenue".into(),
            phone: "+966 11 400 4545".into(),
            rating: 4.3,
            delivery_fee_cents: 250,
            min_order_cents: 1000,
            is_open: true,
            image_url: image("green-bowl"),
            tags: strings(&["vegetarian", "vegan options"]),
        },
        Business {
            id: "harbor-fish-house".into(),
            name: "Harbor Fish House".into(),
            cuisine: "Seafood".into(),
            description: "Catch of the day by the old port".into(),
            address: "1 Fishermen's Wharf, Old Port".into(),
            phone: "+966 11 400 7788".into(),
            rating: 4.7,
            delivery_fee_cents: 400,
            min_order_cents: 2500,
            is_open: false,
            image_url: image("harbor-fish-house"),
            tags: strings(&["fresh", "waterfront"]),
        },
    ]
}

fn dish(
    id: &str,
    business_id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category: &str,
    rating: f32,
) -> MenuItem {
    MenuItem {
        id: id.into(),
        business_id: business_id.into(),
        name: name.into(),
        description: description.into(),
        price_cents,
        category: category.into(),
        rating,
        image_url: image(id),
        available: true,
    }
}

pub(super) fn menu_items() -> Vec<MenuItem> {
    let mut kunafa = dish(
        "nakheel-kunafa",
        "al-nakheel-grill",
        "Kunafa",
        "Warm cheese pastry with syrup",
        550,
        "Desserts",
        4.9,
    );
    kunafa.available = false;

    vec![
        dish(
            "nakheel-chicken-shawarma",
            "al-nakheel-grill",
            "Chicken Shawarma",
            "Marinated chicken, garlic sauce and pickles in saj bread",
            850,
            "Wraps",
            4.7,
        ),
        dish(
            "nakheel-mixed-grill",
            "al-nakheel-grill",
            "Mixed Grill Platter",
            "Kebab, shish tawook and lamb chops with rice",
            2400,
            "Grills",
            4.8,
        ),
        dish(
            "nakheel-falafel-wrap",
            "al-nakheel-grill",
            "Falafel Wrap",
            "Crispy chickpea falafel with tahini",
            600,
            "Wraps",
            4.5,
        ),
        dish(
            "nakheel-hummus",
            "al-nakheel-grill",
            "Hummus with Olive Oil",
            "Creamy chickpea dip served with bread",
            450,
            "Starters",
            4.4,
        ),
        dish(
            "nakheel-mint-lemonade",
            "al-nakheel-grill",
            "Mint Lemonade",
            "Fresh lemon blended with mint",
            350,
            "Drinks",
            4.6,
        ),
        kunafa,
        dish(
            "napoli-margherita",
            "bella-napoli",
            "Margherita Pizza",
            "Tomato, mozzarella and basil",
            1200,
            "Pizza",
            4.6,
        ),
        dish(
            "napoli-diavola",
            "bella-napoli",
            "Diavola Pizza",
            "Spicy salami and chili oil",
            1450,
            "Pizza",
            4.5,
        ),
        dish(
            "napoli-carbonara",
            "bella-napoli",
            "Spaghetti Carbonara",
            "Egg yolk, pecorino and black pepper",
            1350,
            "Pasta",
            4.4,
        ),
        dish(
            "napoli-tiramisu",
            "bella-napoli",
            "Tiramisu",
            "Espresso-soaked ladyfingers and mascarpone",
            650,
            "Desserts",
            4.8,
        ),
        dish(
            "napoli-sparkling-water",
            "bella-napoli",
            "Sparkling Water",
            "750 ml bottle",
            250,
            "Drinks",
            4.0,
        ),
        dish(
            "green-quinoa-bowl",
            "green-bowl",
            "Quinoa Power Bowl",
            "Quinoa, roasted vegetables and lemon dressing",
            1100,
            "Bowls",
            4.4,
        ),
        dish(
            "green-falafel-salad",
            "green-bowl",
            "Falafel Salad",
            "Baked falafel over greens with yogurt sauce",
            950,
            "Salads",
            4.2,
        ),
        dish(
            "green-berry-smoothie",
            "green-bowl",
            "Berry Smoothie",
            "Mixed berries, banana and oat milk",
            550,
            "Drinks",
            4.5,
        ),
        dish(
            "harbor-grilled-hammour",
            "harbor-fish-house",
            "Grilled Hammour",
            "Local grouper with saffron rice",
            2800,
            "Mains",
            4.8,
        ),
        dish(
            "harbor-fish-chips",
            "harbor-fish-house",
            "Fish and Chips",
            "Beer-free batter, hand-cut fries",
            1600,
            "Mains",
            4.3,
        ),
    ]
}

// ============================================================================
// Transport directory
// ============================================================================

pub(super) fn transport_hubs() -> Vec<TransportHub> {
    vec![
        TransportHub {
            id: "central-bus-station".into(),
            name: "Central Bus Station".into(),
            kind: HubKind::BusStation,
            address: "King Faisal Road, Downtown".into(),
            phone: Some("+966 11 500 1000".into()),
            hours: "05:00 - 00:30".into(),
            routes: strings(&["Route 1", "Route 7", "Intercity Express"]),
            tags: strings(&["intercity", "ticket office"]),
        },
        TransportHub {
            id: "city-center-metro".into(),
            name: "City Center Metro".into(),
            kind: HubKind::Metro,
            address: "Municipality Square".into(),
            phone: None,
            hours: "06:00 - 23:59".into(),
            routes: strings(&["Red Line", "Blue Line"]),
            tags: strings(&["interchange", "accessible"]),
        },
        TransportHub {
            id: "university-metro".into(),
            name: "University Metro".into(),
            kind: HubKind::Metro,
            address: "University Avenue".into(),
            phone: None,
            hours: "06:00 - 23:59".into(),
            routes: strings(&["Blue Line"]),
            tags: strings(&["students"]),
        },
        TransportHub {
            id: "airport-rail-station".into(),
            name: "Airport Rail Station".into(),
            kind: HubKind::RailStation,
            address: "Terminal 2, International Airport".into(),
            phone: Some("+966 11 500 2200".into()),
            hours: "24 hours".into(),
            routes: strings(&["Airport Link"]),
            tags: strings(&["airport", "luggage"]),
        },
        TransportHub {
            id: "old-port-ferry".into(),
            name: "Old Port Ferry Terminal".into(),
            kind: HubKind::FerryTerminal,
            address: "Fishermen's Wharf, Old Port".into(),
            phone: Some("+966 11 500 3300".into()),
            hours: "07:00 - 21:00".into(),
            routes: strings(&["Island Ferry"]),
            tags: strings(&["waterfront"]),
        },
        TransportHub {
            id: "market-square-taxi".into(),
            name: "Market Square Taxi Rank".into(),
            kind: HubKind::TaxiRank,
            address: "Market Square, Old Town".into(),
            phone: Some("+966 11 500 4400".into()),
            hours: "24 hours".into(),
            routes: Vec::new(),
            tags: strings(&["24h", "accessible"]),
        },
    ]
}

// ============================================================================
// Government service guides
// ============================================================================

fn civic_center() -> GuideOffice {
    GuideOffice {
        name: "Civic Services Center".into(),
        address: "Municipality Square, Downtown".into(),
        phone: Some("+966 11 600 1000".into()),
        hours: "Sun-Thu 08:00 - 15:00".into(),
    }
}

fn north_branch() -> GuideOffice {
    GuideOffice {
        name: "North District Service Branch".into(),
        address: "45 Olaya Street, North District".into(),
        phone: Some("+966 11 600 2000".into()),
        hours: "Sun-Thu 08:00 - 20:00".into(),
    }
}

pub(super) fn service_guides() -> Vec<ServiceGuide> {
    vec![
        ServiceGuide {
            id: "national-id-renewal".into(),
            title: "National ID Card Renewal".into(),
            category: "Documents".into(),
            summary: "Renew an expiring or expired national identity card".into(),
            steps: strings(&[
                "Book an appointment in the app or at a service branch",
                "Bring your current card and documents to the appointment",
                "Have your photo and fingerprints taken",
                "Pay the renewal fee",
                "Collect the new card when notified",
            ]),
            required_documents: strings(&["Current national ID card", "Recent passport photo"]),
            fee: "Free".into(),
            processing_time: "5 working days".into(),
            offices: vec![civic_center(), north_branch()],
        },
        ServiceGuide {
            id: "passport-application".into(),
            title: "Passport Application".into(),
            category: "Documents".into(),
            summary: "Apply for a first passport or replace a full one".into(),
            steps: strings(&[
                "Fill in the passport application form",
                "Submit the form with your documents",
                "Pay the passport fee",
                "Track the application by reference number",
            ]),
            required_documents: strings(&[
                "National ID card",
                "Two passport photos",
                "Previous passport, if any",
            ]),
            fee: "300.00".into(),
            processing_time: "10 working days".into(),
            offices: vec![civic_center()],
        },
        ServiceGuide {
            id: "birth-certificate".into(),
            title: "Birth Certificate Issuance".into(),
            category: "Civil Status".into(),
            summary: "Register a newborn and obtain the birth certificate".into(),
            steps: strings(&[
                "Obtain the birth notification from the hospital",
                "Register the birth within 30 days",
                "Receive the certificate at the counter",
            ]),
            required_documents: strings(&[
                "Hospital birth notification",
                "Parents' national ID cards",
                "Marriage certificate",
            ]),
            fee: "Free".into(),
            processing_time: "Same day".into(),
            offices: vec![civic_center(), north_branch()],
        },
        ServiceGuide {
            id: "business-license".into(),
            title: "Commercial Business License".into(),
            category: "Business".into(),
            summary: "License a shop, restaurant or office to operate in the city".into(),
            steps: strings(&[
                "Reserve the trade name",
                "Submit the tenancy contract for the premises",
                "Pass the civil defense and health inspections",
                "Pay the license fee",
            ]),
            required_documents: strings(&[
                "Commercial registration",
                "Tenancy contract",
                "Owner national ID card",
            ]),
            fee: "1500.00".into(),
            processing_time: "15 working days".into(),
            offices: vec![civic_center()],
        },
        ServiceGuide {
            id: "building-permit".into(),
            title: "Residential Building Permit".into(),
            category: "Housing".into(),
            summary: "Permit to build or extend a private residence".into(),
            steps: strings(&[
                "Hire a licensed engineering office",
                "Submit the architectural drawings",
                "Receive the site inspection",
                "Pay the permit fee and collect the permit",
            ]),
            required_documents: strings(&[
                "Title deed",
                "Approved architectural drawings",
                "Owner national ID card",
            ]),
            fee: "750.00".into(),
            processing_time: "20 working days".into(),
            offices: vec![north_branch()],
        },
        ServiceGuide {
            id: "health-card".into(),
            title: "Municipal Health Card".into(),
            category: "Health".into(),
            summary: "Health certificate required for food and personal care workers".into(),
            steps: strings(&[
                "Complete the medical examination at an approved clinic",
                "Attend the food safety awareness course",
                "Print the card from the app",
            ]),
            required_documents: strings(&["National ID card or residence permit", "Medical examination result"]),
            fee: "100.00".into(),
            processing_time: "3 working days".into(),
            offices: vec![north_branch()],
        },
    ]
}

// ============================================================================
// Citizen directory
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    name: &str,
    department: &str,
    title: &str,
    phone: &str,
    email: Option<&str>,
    office: &str,
    tags: &[&str],
) -> DirectoryContact {
    DirectoryContact {
        id: id.into(),
        name: name.into(),
        department: department.into(),
        title: title.into(),
        phone: phone.into(),
        email: email.map(String::from),
        office: office.into(),
        tags: strings(tags),
    }
}

pub(super) fn contacts() -> Vec<DirectoryContact> {
    vec![
        contact(
            "citizen-affairs-desk",
            "Citizen Affairs Desk",
            "Citizen Affairs",
            "General enquiries",
            "940",
            Some("info@citizen-services.example"),
            "Civic Services Center",
            &["complaints", "enquiries"],
        ),
        contact(
            "sara-alharbi",
            "Sara Al-Harbi",
            "Citizen Affairs",
            "Head of Customer Care",
            "+966 11 600 1010",
            Some("sara.alharbi@citizen-services.example"),
            "Civic Services Center",
            &["customer care"],
        ),
        contact(
            "omar-haddad",
            "Omar Haddad",
            "Urban Planning",
            "Building Permits Officer",
            "+966 11 600 2020",
            Some("omar.haddad@citizen-services.example"),
            "North District Service Branch",
            &["permits", "construction"],
        ),
        contact(
            "layla-mansour",
            "Layla Mansour",
            "Public Health",
            "Food Safety Inspector",
            "+966 11 600 3030",
            None,
            "North District Service Branch",
            &["restaurants", "inspections", "health card"],
        ),
        contact(
            "transport-hotline",
            "Transport Hotline",
            "Transport",
            "Lost property and route information",
            "+966 11 500 9999",
            Some("transport@citizen-services.example"),
            "Central Bus Station",
            &["lost property", "routes"],
        ),
        contact(
            "khalid-nasser",
            "Khalid Nasser",
            "Revenue",
            "Municipal Fees Officer",
            "+966 11 600 4040",
            Some("khalid.nasser@citizen-services.example"),
            "Civic Services Center",
            &["fees", "payments", "licenses"],
        ),
    ]
}
