//! The fixed ElanVir product catalog
//!
//! Twenty curated products mirroring the storefront's reference data. The
//! catalog is immutable; curation only ever borrows from it.

use crate::catalog::product::{Category, Product};
use crate::catalog::tags::{Tag, TagSet};
use std::sync::LazyLock;

fn entry(
    id: u32,
    name: &'static str,
    price: f64,
    description: &'static str,
    category: Category,
    stock: u32,
    tags: &[Tag],
    featured: bool,
) -> Product {
    Product {
        id,
        name,
        price,
        description,
        category,
        stock,
        tags: TagSet::from_tags(tags),
        featured,
    }
}

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    use Category::{Accessories, Apparel, Home};
    use Tag::{Handcrafted, LimitedEdition, Luxury, Sustainable, Timeless};

    vec![
        entry(
            1,
            "Cashmere Harmony Sweater",
            285.0,
            "Luxuriously soft cashmere sweater with minimalist design. Crafted from the finest Italian cashmere for ultimate comfort and elegance.",
            Apparel,
            12,
            &[Sustainable, Handcrafted, Timeless],
            true,
        ),
        entry(
            2,
            "Artisan Ceramic Vase",
            165.0,
            "Hand-thrown ceramic vase with organic curves. Each piece is unique, showcasing the artisan's mastery and attention to detail.",
            Home,
            8,
            &[Handcrafted, LimitedEdition, Sustainable],
            false,
        ),
        entry(
            3,
            "Heritage Leather Handbag",
            450.0,
            "Timeless leather handbag crafted from premium Italian leather. Features elegant hardware and spacious interior design.",
            Accessories,
            6,
            &[Timeless, Handcrafted, Luxury],
            true,
        ),
        entry(
            4,
            "Silk Essence Scarf",
            120.0,
            "Pure silk scarf with hand-painted botanical motifs. A versatile accessory that elevates any ensemble.",
            Accessories,
            15,
            &[Sustainable, Handcrafted, LimitedEdition],
            false,
        ),
        entry(
            5,
            "Minimalist Oak Table",
            890.0,
            "Solid oak dining table with clean lines and natural finish. Sustainably sourced wood with expert craftsmanship.",
            Home,
            4,
            &[Sustainable, Timeless, Handcrafted],
            true,
        ),
        entry(
            6,
            "Pearl Drop Earrings",
            195.0,
            "Elegant freshwater pearl earrings with 14k gold settings. Classic design meets contemporary sophistication.",
            Accessories,
            20,
            &[Timeless, Luxury, Handcrafted],
            false,
        ),
        entry(
            7,
            "Merino Wool Coat",
            525.0,
            "Premium merino wool coat with tailored silhouette. Features natural temperature regulation and refined finishing.",
            Apparel,
            9,
            &[Sustainable, Timeless, Luxury],
            true,
        ),
        entry(
            8,
            "Handwoven Throw Blanket",
            245.0,
            "Luxurious alpaca wool throw with traditional weaving techniques. Adds warmth and texture to any living space.",
            Home,
            11,
            &[Handcrafted, Sustainable, Timeless],
            false,
        ),
        entry(
            9,
            "Crystal Wine Decanter",
            320.0,
            "Hand-blown crystal decanter with geometric design. Enhances wine aeration while serving as elegant decor.",
            Home,
            7,
            &[Handcrafted, Luxury, LimitedEdition],
            true,
        ),
        entry(
            10,
            "Vintage-Inspired Watch",
            680.0,
            "Swiss-made timepiece with vintage aesthetics and modern precision. Features sapphire crystal and leather strap.",
            Accessories,
            5,
            &[Timeless, Luxury, Handcrafted],
            false,
        ),
        entry(
            11,
            "Linen Shirt Collection",
            165.0,
            "Premium linen shirt with relaxed fit and natural breathability. Perfect for both casual and refined occasions.",
            Apparel,
            18,
            &[Sustainable, Timeless, Handcrafted],
            false,
        ),
        entry(
            12,
            "Marble Bookends Set",
            145.0,
            "Sculptural marble bookends with unique veining patterns. Functional art pieces for the modern home library.",
            Home,
            12,
            &[Handcrafted, Luxury, Timeless],
            false,
        ),
        entry(
            13,
            "Cashmere Wrap Dress",
            395.0,
            "Elegant cashmere wrap dress with flowing silhouette. Versatile piece that transitions from day to evening.",
            Apparel,
            8,
            &[Luxury, Timeless, Sustainable],
            true,
        ),
        entry(
            14,
            "Brass Candlestick Holders",
            95.0,
            "Artisanal brass candlestick holders with patina finish. Creates ambient lighting for intimate gatherings.",
            Home,
            16,
            &[Handcrafted, Timeless, LimitedEdition],
            false,
        ),
        entry(
            15,
            "Sustainable Tote Bag",
            85.0,
            "Eco-friendly canvas tote with leather handles. Made from organic cotton and responsibly sourced materials.",
            Accessories,
            25,
            &[Sustainable, Handcrafted, Timeless],
            false,
        ),
        entry(
            16,
            "Silk Pillow Cases Set",
            125.0,
            "Pure mulberry silk pillowcases with natural hypoallergenic properties. Luxury bedding for ultimate comfort.",
            Home,
            14,
            &[Luxury, Sustainable, Handcrafted],
            false,
        ),
        entry(
            17,
            "Leather Journal Portfolio",
            185.0,
            "Handcrafted leather journal with acid-free paper. Perfect for creative minds and thoughtful documentation.",
            Accessories,
            10,
            &[Handcrafted, Timeless, Sustainable],
            false,
        ),
        entry(
            18,
            "Alpaca Wool Sweater",
            225.0,
            "Soft alpaca wool sweater with cable knit details. Naturally temperature-regulating and incredibly comfortable.",
            Apparel,
            13,
            &[Sustainable, Handcrafted, Luxury],
            false,
        ),
        entry(
            19,
            "Ceramic Dinnerware Set",
            285.0,
            "Handmade ceramic dinnerware with organic glazing. Each piece showcases unique characteristics and artisanal beauty.",
            Home,
            6,
            &[Handcrafted, LimitedEdition, Timeless],
            true,
        ),
        entry(
            20,
            "Sterling Silver Bracelet",
            155.0,
            "Minimalist sterling silver bracelet with brushed finish. Contemporary design that complements any style.",
            Accessories,
            17,
            &[Timeless, Handcrafted, Luxury],
            false,
        ),
    ]
});

/// The full ElanVir product catalog
pub fn catalog() -> &'static [Product] {
    &CATALOG
}
