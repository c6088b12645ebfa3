//! Fixture catalog data.

use renew_rubber_core::{Price, Product, ProductCategory, ProductId};

fn product(
    id: &str,
    name: &str,
    description: &str,
    long_description: &str,
    cents: i64,
    image: &str,
    category: ProductCategory,
    rubber_type: Option<&str>,
    features: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        long_description: Some(long_description.to_owned()),
        price: Price::from_cents(cents),
        image: image.to_owned(),
        category,
        rubber_type: rubber_type.map(str::to_owned),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        in_stock: true,
    }
}

/// The six services offered in the shop.
#[must_use]
pub fn mock_products() -> Vec<Product> {
    vec![
        product(
            "prod_01",
            "Vibram XS Edge Resole",
            "Premium edge rubber for technical climbing. The go-to choice for precision footwork on small edges.",
            "The Vibram XS Edge is the gold standard for technical climbing. This 4mm rubber compound offers exceptional edging performance on the smallest holds. Perfect for sport climbing, competition, and technical boulder problems where precision is paramount. Our expert craftsmen carefully apply this rubber to restore your shoes to peak performance.",
            4500,
            "https://images.unsplash.com/photo-1522163182402-834f871fd851?w=600&q=80",
            ProductCategory::Resole,
            Some("Vibram XS Edge"),
            &[
                "4mm thickness",
                "Superior edge performance",
                "Long-lasting durability",
                "Professional application",
            ],
        ),
        product(
            "prod_02",
            "Vibram XS Grip 2 Resole",
            "Maximum friction for steep terrain. Ideal for bouldering and overhanging routes.",
            "Vibram XS Grip 2 is engineered for maximum friction on steep and overhanging terrain. This softer compound excels where grip is more important than edging precision. The rubber molds perfectly to holds, providing confidence on smears and volumes. Our resoling service restores your shoes with this premium rubber for a fraction of the cost of new shoes.",
            4500,
            "https://images.unsplash.com/photo-1564769662533-4f00a87b4056?w=600&q=80",
            ProductCategory::Resole,
            Some("Vibram XS Grip 2"),
            &[
                "4mm thickness",
                "Maximum friction",
                "Soft compound",
                "Ideal for overhangs",
            ],
        ),
        product(
            "prod_03",
            "Full Resole + Toe Cap",
            "Complete restoration with new toe rand. Best value for heavily worn shoes.",
            "Our most comprehensive resoling package. This includes a full sole replacement plus a new toe rand/cap, giving your shoes a complete refresh. Ideal for shoes with significant toe wear or damage to the rand. We use premium Vibram rubber and expert techniques to bring your shoes back to life. This service extends the life of your shoes significantly.",
            6500,
            "https://images.unsplash.com/photo-1606928824898-aacda4f1763e?w=600&q=80",
            ProductCategory::Resole,
            Some("Vibram XS Edge / XS Grip 2"),
            &[
                "Full sole replacement",
                "New toe rand",
                "Choice of rubber",
                "Best value restoration",
            ],
        ),
        product(
            "prod_04",
            "Toe Rand Repair",
            "Targeted repair for worn toe areas. Extend the life of your favorite pair.",
            "A focused repair that addresses the most common wear point on climbing shoes - the toe area. Our toe rand repair patches and reinforces the toe cap without requiring a full resole. This is a cost-effective option for shoes where the sole is still in good condition but the toe area shows wear. Quick turnaround and excellent results.",
            3500,
            "https://images.unsplash.com/photo-1516592673884-4a382d1124c2?w=600&q=80",
            ProductCategory::Repair,
            Some("Vibram XS Edge"),
            &[
                "Toe area focus",
                "Quick turnaround",
                "Cost-effective",
                "Preserves shoe shape",
            ],
        ),
        product(
            "prod_05",
            "Unparallel RH Resole",
            "High-performance rubber with exceptional sensitivity and grip balance.",
            "Unparallel RH (Real Honor) rubber offers an excellent balance of sensitivity, grip, and durability. This newer rubber compound has quickly become a favorite among climbers who want to feel the rock while maintaining excellent friction. Our resolers are trained specifically in applying Unparallel rubber for optimal performance.",
            4800,
            "https://images.unsplash.com/photo-1682687220742-aba13b6e50ba?w=600&q=80",
            ProductCategory::Resole,
            Some("Unparallel RH"),
            &[
                "Excellent sensitivity",
                "Balanced performance",
                "Modern compound",
                "Versatile climbing",
            ],
        ),
        product(
            "prod_06",
            "Express Resole Service",
            "Priority handling with 5-day turnaround. For when you cannot wait.",
            "Need your shoes back fast? Our Express Resole Service puts your shoes at the front of the queue. With a guaranteed 5 business day turnaround (standard is 2-3 weeks), you will be back on the wall in no time. Includes your choice of Vibram XS Edge or XS Grip 2 rubber with the same expert craftsmanship as our standard service.",
            6000,
            "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=600&q=80",
            ProductCategory::Resole,
            Some("Choice of Vibram"),
            &[
                "5-day turnaround",
                "Priority handling",
                "Choice of rubber",
                "Same quality guarantee",
            ],
        ),
    ]
}
