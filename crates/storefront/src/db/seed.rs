//! Default catalog written the first time a collection is read.
//!
//! Stock levels of products with a restock history agree with the last
//! entry's `total_after`.

use chrono::{DateTime, NaiveDate, Utc};

use beauty_store_core::{
    CategoryId, GalleryItem, GalleryItemId, InventoryEntry, InventoryEntryId, Money, Product,
    ProductId, Service, ServiceCategory, ServiceId,
};

const BRAIDED_WIGS: &str = "Braided Wigs";
const HUMAN_HAIR: &str = "Human Hair Extension";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn restock(id: &str, date: DateTime<Utc>, added_by: &str, units: u32, total: u32) -> InventoryEntry {
    InventoryEntry {
        id: InventoryEntryId::new(id),
        date,
        added_by: added_by.to_owned(),
        units_added: units,
        total_after: total,
    }
}

fn product(id: &str, name: &str, pence: i64, category: &str, image: &str, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Money::from_minor(pence),
        category: category.to_owned(),
        image: image.to_owned(),
        stock,
        inventory_history: Vec::new(),
    }
}

/// Shop products.
#[must_use]
pub fn products() -> Vec<Product> {
    let mut products = vec![
        product(
            "braided-wigs-1",
            "Dreadlocks Braid Wig",
            12_999,
            BRAIDED_WIGS,
            "/assets/braided-wigs/dreadlocks-braid.jpeg",
            45,
        ),
        product(
            "braided-wigs-2",
            "Knotless Braid Wig",
            14_999,
            BRAIDED_WIGS,
            "/assets/braided-wigs/knotless-braid.jpeg",
            57,
        ),
        product(
            "braided-wigs-3",
            "Box Twist Braid Wig",
            13_999,
            BRAIDED_WIGS,
            "/assets/braided-wigs/box-twist-braid.jpeg",
            40,
        ),
        product(
            "braided-wigs-4",
            "Weave Braid Wig",
            15_999,
            BRAIDED_WIGS,
            "/assets/braided-wigs/weave-braid.jpeg",
            18,
        ),
        product(
            "braided-wigs-5",
            "Boho Knotless Braid Wig",
            16_999,
            BRAIDED_WIGS,
            "/assets/braided-wigs/boho-knotless-braid.jpeg",
            22,
        ),
        product(
            "braided-wigs-6",
            "Knotless Twist Wig",
            15_499,
            BRAIDED_WIGS,
            "/assets/braided-wigs/knotless-twist.jpeg",
            35,
        ),
        product(
            "braided-wigs-7",
            "Ombré Braid Wig",
            17_499,
            BRAIDED_WIGS,
            "/assets/braided-wigs/ombre-braid.jpeg",
            15,
        ),
        product(
            "braided-wigs-8",
            "Boho Twist Braid Wig",
            16_499,
            BRAIDED_WIGS,
            "/assets/braided-wigs/boho-twist-braid.jpeg",
            27,
        ),
        product(
            "braided-wigs-9",
            "Twist Braid Wig",
            14_499,
            BRAIDED_WIGS,
            "/assets/braided-wigs/twist-braid.jpeg",
            40,
        ),
        product(
            "braided-wigs-10",
            "Box Braid Wig",
            13_499,
            BRAIDED_WIGS,
            "/assets/braided-wigs/box-braid.jpeg",
            33,
        ),
        product(
            "human-hair-1",
            "Vietnamese SDD Raw Wavy (300g) + 5x5 Closure",
            45_000,
            HUMAN_HAIR,
            "/assets/human-hair/vietnamese-sdd-raw-wavy-300g-5x5.jpeg",
            12,
        ),
        product(
            "human-hair-2",
            "Vietnamese Double Donor Raw Wavy (250g) + 6x6 Closure",
            50_000,
            HUMAN_HAIR,
            "/assets/human-hair/vietnamese-double-donor-raw-wavy-250g-6x6.jpeg",
            8,
        ),
        product(
            "human-hair-3",
            "Vietnamese Bone Straight Unit (300g)",
            48_000,
            HUMAN_HAIR,
            "/assets/human-hair/vietnamese-bone-straight-unit-300g.jpeg",
            10,
        ),
        product(
            "human-hair-4",
            "Vietnamese Single Donor Raw Wavy (300g) + 5x5 Closure",
            35_000,
            HUMAN_HAIR,
            "/assets/human-hair/vietnamese-single-donor-raw-wavy-300g-5x5.jpeg",
            14,
        ),
        product(
            "human-hair-5",
            "SDD Raw Unit + 6x6 Closure",
            40_000,
            HUMAN_HAIR,
            "/assets/human-hair/sdd-raw-unit-6x6.jpeg",
            9,
        ),
        product(
            "human-hair-6",
            "Frontal Vietnamese Single Donor Raw Wavy (300g)",
            45_000,
            HUMAN_HAIR,
            "/assets/human-hair/frontal-vietnamese-single-donor-raw-wavy-300g.jpeg",
            11,
        ),
        product(
            "human-hair-7",
            "Frontal Raw Wavy (300g) Unit",
            40_000,
            HUMAN_HAIR,
            "/assets/human-hair/frontal-raw-wavy-300g-unit.jpeg",
            13,
        ),
        product(
            "human-hair-8",
            "Vietnamese Single Donor Raw Wavy (300g) + 6x6 Closure",
            45_000,
            HUMAN_HAIR,
            "/assets/human-hair/vietnamese-single-donor-raw-wavy-300g-6x6.jpeg",
            7,
        ),
    ];

    let histories = [
        vec![
            restock("inv-1", at(2025, 9, 15, 10, 30), "admin@shop.com", 20, 20),
            restock("inv-2", at(2025, 9, 22, 14, 15), "admin@shop.com", 15, 35),
            restock("inv-3", at(2025, 10, 5, 9, 0), "manager@shop.com", 10, 45),
        ],
        vec![
            restock("inv-4", at(2025, 8, 20, 11, 0), "admin@shop.com", 25, 25),
            restock("inv-5", at(2025, 9, 10, 16, 45), "admin@shop.com", 12, 37),
            restock("inv-6", at(2025, 9, 28, 13, 20), "manager@shop.com", 8, 45),
            restock("inv-7", at(2025, 10, 12, 10, 30), "admin@shop.com", 7, 52),
            restock("inv-8", at(2025, 10, 15, 14, 0), "staff@shop.com", 5, 57),
        ],
        vec![
            restock("inv-9", at(2025, 9, 1, 9, 15), "admin@shop.com", 30, 30),
            restock("inv-10", at(2025, 9, 18, 15, 30), "manager@shop.com", 10, 40),
        ],
    ];
    for (product, history) in products.iter_mut().zip(histories) {
        product.inventory_history = history;
    }
    products
}

fn service(id: &str, title: &str, description: &str, category: &str, price: i64) -> Service {
    Service {
        id: ServiceId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category: CategoryId::new(category),
        path: format!("/book/{id}"),
        price: Money::from_major(price),
    }
}

/// Bookable services.
#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        service(
            "bridal-makeup",
            "Bridal Makeup",
            "Look stunning on your special day",
            "makeup",
            200,
        ),
        service(
            "party-makeup",
            "Party Makeup",
            "Glamorous looks for any celebration",
            "makeup",
            100,
        ),
        service(
            "graduation-makeup",
            "Graduation Makeup",
            "Beautiful looks for your milestone",
            "makeup",
            100,
        ),
        service(
            "photoshoot-glam",
            "Photo Shoot Glam",
            "Camera-ready makeup for your shoot",
            "makeup",
            100,
        ),
        service(
            "bridal-hairstyling",
            "Bridal Hairstyling",
            "Elegant bridal hair designs",
            "hair",
            200,
        ),
        service(
            "wig-installation",
            "Wig Installation",
            "Professional wig installation service",
            "hair",
            100,
        ),
    ]
}

/// Service categories.
#[must_use]
pub fn categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory {
            id: CategoryId::new("makeup"),
            name: "Make-up Services".to_owned(),
            icon: "Sparkles".to_owned(),
        },
        ServiceCategory {
            id: CategoryId::new("hair"),
            name: "Hair Styling Services".to_owned(),
            icon: "Scissors".to_owned(),
        },
    ]
}

fn gallery_item(
    id: u64,
    title: &str,
    client: &str,
    description: &str,
    image: &str,
    category: &str,
) -> GalleryItem {
    GalleryItem {
        id: GalleryItemId::new(id),
        title: title.to_owned(),
        client: client.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        category: category.to_owned(),
    }
}

/// Portfolio entries.
#[must_use]
pub fn gallery() -> Vec<GalleryItem> {
    vec![
        gallery_item(
            1,
            "Bridal Makeup & Styling",
            "Sarah M.",
            "Complete bridal makeover with natural glam look and elegant updo for a summer wedding.",
            "https://images.unsplash.com/photo-1487412947147-5cebf100ffc2?w=800&q=80",
            "Bridal",
        ),
        gallery_item(
            2,
            "Party Glam Makeup",
            "Jessica L.",
            "Bold smokey eyes with glossy lips for a birthday celebration.",
            "https://images.unsplash.com/photo-1516975080664-ed2fc6a32937?w=800&q=80",
            "Party",
        ),
        gallery_item(
            3,
            "Natural Everyday Look",
            "Emma K.",
            "Fresh, dewy makeup with soft waves for a photoshoot.",
            "https://images.unsplash.com/photo-1512496015851-a90fb38ba796?w=800&q=80",
            "Natural",
        ),
        gallery_item(
            4,
            "Luxury Wig Installation",
            "Michelle D.",
            "Premium lace front wig installation with seamless hairline.",
            "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?w=800&q=80",
            "Wigs",
        ),
        gallery_item(
            5,
            "Braided Updo Style",
            "Aisha T.",
            "Intricate braided updo perfect for special occasions.",
            "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=800&q=80",
            "Hairstyling",
        ),
        gallery_item(
            6,
            "Evening Glam Transformation",
            "Rachel P.",
            "Full glam makeup with dramatic lashes and sleek hairstyle.",
            "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=800&q=80",
            "Evening",
        ),
    ]
}
