//! Sample catalog: resets the schema and loads a restaurant-supply catalog.
//! Two products are soft-deleted and a few are drafts so list filtering has something to hide.

use crate::error::AppError;
use crate::migration::reset_schema;
use sqlx::SqlitePool;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    status: &'static str,
    deleted: bool,
    days_ago: u32,
    variants: &'static [(&'static str, &'static str, i64, i64)],
}

const fn product(
    name: &'static str,
    description: &'static str,
    category: &'static str,
    days_ago: u32,
    variants: &'static [(&'static str, &'static str, i64, i64)],
) -> SeedProduct {
    SeedProduct {
        name,
        description,
        category,
        status: "active",
        deleted: false,
        days_ago,
        variants,
    }
}

const fn draft(p: SeedProduct) -> SeedProduct {
    SeedProduct { status: "draft", ..p }
}

const fn deleted(p: SeedProduct) -> SeedProduct {
    SeedProduct { deleted: true, ..p }
}

const CATEGORIES: &[(&str, &str)] = &[
    ("Proteins", "Beef, poultry, seafood, and plant-based proteins"),
    ("Produce", "Fresh fruits, vegetables, and herbs"),
    ("Dairy & Eggs", "Milk, cheese, butter, cream, and eggs"),
    ("Dry Goods & Pantry", "Grains, pasta, oils, sauces, and shelf-stable staples"),
    ("Beverages", "Coffee, tea, juices, and fountain supplies"),
    ("Kitchen Supplies", "Disposables, cleaning products, and smallwares"),
];

// (sku, name, price_cents, inventory_count)
const PRODUCTS: &[SeedProduct] = &[
    product("Angus Beef Patties", "80/20 blend Angus beef patties, hand-formed. Flash-frozen for freshness.", "Proteins", 45, &[
        ("ABP-4OZ", "4 oz (case of 40)", 8999, 35),
        ("ABP-6OZ", "6 oz (case of 30)", 10999, 28),
        ("ABP-8OZ", "8 oz (case of 20)", 11999, 15),
    ]),
    product("Boneless Skinless Chicken Breast", "All-natural boneless skinless chicken breast. No antibiotics ever.", "Proteins", 30, &[
        ("BSCB-5LB", "5 lb bag", 2199, 80),
        ("BSCB-10LB", "10 lb case", 3999, 45),
        ("BSCB-40LB", "40 lb case", 13999, 12),
    ]),
    product("Atlantic Salmon Fillet", "Fresh Atlantic salmon fillets, skin-on, pin-bone removed. Farm-raised.", "Proteins", 12, &[
        ("ASF-6OZ", "6 oz portion (case of 20)", 15999, 10),
        ("ASF-8OZ", "8 oz portion (case of 16)", 18999, 8),
    ]),
    draft(product("Plant-Based Burger Patty", "Soy and pea protein blend patty. Vegan, non-GMO.", "Proteins", 5, &[
        ("PBP-4OZ", "4 oz (case of 40)", 12999, 20),
    ])),
    product("Applewood Smoked Bacon", "Thick-cut applewood smoked bacon. Cured with sea salt and brown sugar.", "Proteins", 38, &[
        ("ASB-5LB", "5 lb slab", 3499, 50),
        ("ASB-15LB", "15 lb case", 9499, 18),
    ]),
    product("Jumbo Shrimp 16/20", "Wild-caught Gulf shrimp, peeled and deveined. IQF frozen.", "Proteins", 20, &[
        ("JS-2LB", "2 lb bag", 2499, 40),
        ("JS-5LB", "5 lb case", 5499, 22),
    ]),
    product("Romaine Lettuce Hearts", "Crisp romaine hearts, triple-washed and ready to use.", "Produce", 8, &[
        ("RLH-3CT", "3-count pack", 499, 120),
        ("RLH-CS24", "Case of 24", 3299, 25),
    ]),
    product("Vine-Ripened Tomatoes", "Greenhouse-grown vine-ripened tomatoes. Firm and flavorful.", "Produce", 6, &[
        ("VRT-5LB", "5 lb box", 899, 65),
        ("VRT-25LB", "25 lb case", 3499, 15),
    ]),
    product("Yellow Onions", "U.S. #1 grade yellow onions. Ideal for cooking and caramelizing.", "Produce", 14, &[
        ("YO-3LB", "3 lb bag", 349, 200),
        ("YO-50LB", "50 lb sack", 3999, 30),
    ]),
    product("Fresh Basil Bunch", "Fragrant Italian sweet basil. Locally sourced when in season.", "Produce", 3, &[
        ("FBB-1BN", "Single bunch", 299, 45),
        ("FBB-12BN", "Case of 12", 2799, 8),
    ]),
    product("Russet Potatoes", "Premium Idaho Russet potatoes. Great for baking, frying, or mashing.", "Produce", 18, &[
        ("RP-10LB", "10 lb bag", 799, 90),
        ("RP-50LB", "50 lb case", 2999, 20),
    ]),
    deleted(product("Organic Baby Spinach", "Pre-washed organic baby spinach. Discontinued supplier.", "Produce", 60, &[
        ("OBS-1LB", "1 lb clamshell", 599, 3),
        ("OBS-2.5LB", "2.5 lb bag", 1199, 0),
    ])),
    product("Heavy Whipping Cream", "Grade A heavy whipping cream, 36% milkfat. Ultra-pasteurized.", "Dairy & Eggs", 10, &[
        ("HWC-QT", "Quart", 599, 60),
        ("HWC-HG", "Half gallon", 999, 35),
    ]),
    product("Shredded Mozzarella Cheese", "Low-moisture part-skim mozzarella. Perfect melt for pizza and pasta.", "Dairy & Eggs", 22, &[
        ("SMC-5LB", "5 lb bag", 1999, 55),
        ("SMC-20LB", "20 lb case", 6999, 12),
    ]),
    product("Large Grade AA Eggs", "Farm-fresh large Grade AA eggs. Cage-free.", "Dairy & Eggs", 15, &[
        ("EGG-15DZ", "15 dozen case", 4499, 40),
        ("EGG-30DZ", "30 dozen case", 7999, 0),
    ]),
    product("Unsalted Butter", "European-style unsalted butter, 83% butterfat. Ideal for baking and sauces.", "Dairy & Eggs", 28, &[
        ("UB-1LB", "1 lb block", 599, 100),
        ("UB-36LB", "36 lb case", 16999, 5),
    ]),
    draft(product("Crumbled Feta Cheese", "Traditional Mediterranean-style feta, pre-crumbled for salads and toppings.", "Dairy & Eggs", 4, &[
        ("CFC-2LB", "2 lb tub", 1299, 18),
    ])),
    product("Extra Virgin Olive Oil", "First cold-pressed extra virgin olive oil. Imported from Italy.", "Dry Goods & Pantry", 50, &[
        ("EVOO-1L", "1 Liter bottle", 1499, 70),
        ("EVOO-3L", "3 Liter tin", 3499, 30),
        ("EVOO-5GAL", "5 gallon jug", 11999, 8),
    ]),
    product("San Marzano Crushed Tomatoes", "DOP-certified San Marzano tomatoes, hand-crushed with basil.", "Dry Goods & Pantry", 35, &[
        ("SMCT-28OZ", "28 oz can", 499, 150),
        ("SMCT-CS6", "Case of 6", 2499, 40),
    ]),
    product("All-Purpose Flour", "Unbleached enriched all-purpose flour. Consistent protein content for versatile use.", "Dry Goods & Pantry", 42, &[
        ("APF-5LB", "5 lb bag", 499, 110),
        ("APF-25LB", "25 lb bag", 1699, 45),
        ("APF-50LB", "50 lb bag", 2999, 20),
    ]),
    product("Jasmine Rice", "Premium Thai jasmine rice. Aromatic long-grain, naturally gluten-free.", "Dry Goods & Pantry", 25, &[
        ("JR-5LB", "5 lb bag", 799, 85),
        ("JR-25LB", "25 lb bag", 2999, 30),
        ("JR-50LB", "50 lb bag", 4999, 10),
    ]),
    deleted(product("Sriracha Hot Sauce (Original)", "Classic rooster brand sriracha. Recalled lot, discontinued.", "Dry Goods & Pantry", 55, &[
        ("SHS-17OZ", "17 oz bottle", 499, 2),
        ("SHS-28OZ", "28 oz bottle", 799, 0),
    ])),
    product("Cold Brew Coffee Concentrate", "Slow-steeped 12-hour cold brew concentrate. Dilute 1:1 with water or milk.", "Beverages", 16, &[
        ("CBC-32OZ", "32 oz bottle", 1299, 45),
        ("CBC-1GAL", "1 gallon jug", 3499, 15),
    ]),
    product("Orange Juice (Not from Concentrate)", "Fresh-squeezed style premium orange juice. No added sugar.", "Beverages", 9, &[
        ("OJ-HG", "Half gallon", 699, 55),
        ("OJ-GAL", "1 gallon", 1099, 30),
    ]),
    draft(product("Chai Tea Latte Mix", "Spiced black tea latte powder mix. Just add steamed milk.", "Beverages", 2, &[
        ("CTL-2LB", "2 lb canister", 1999, 25),
    ])),
    product("Lemonade Syrup", "Real lemon juice base syrup for fountain or hand-mixed lemonade.", "Beverages", 32, &[
        ("LS-64OZ", "64 oz bottle", 1299, 40),
        ("LS-1GAL", "1 gallon jug", 1999, 20),
    ]),
    product("Nitrile Disposable Gloves", "Powder-free nitrile gloves. FDA food-contact approved.", "Kitchen Supplies", 40, &[
        ("NDG-S", "Small (box of 100)", 1299, 60),
        ("NDG-M", "Medium (box of 100)", 1299, 90),
        ("NDG-L", "Large (box of 100)", 1299, 75),
        ("NDG-XL", "X-Large (box of 100)", 1299, 40),
    ]),
    product("Kraft Paper Takeout Containers", "Eco-friendly kraft paper containers with fold-over lid. Microwave safe.", "Kitchen Supplies", 26, &[
        ("KTC-26OZ", "26 oz (case of 200)", 4999, 30),
        ("KTC-46OZ", "46 oz (case of 150)", 5999, 18),
    ]),
    product("Stainless Steel Mixing Bowls", "Heavy-duty stainless steel mixing bowls. Flat base, rolled rim.", "Kitchen Supplies", 48, &[
        ("SSMB-3QT", "3 Quart", 1299, 0),
        ("SSMB-5QT", "5 Quart", 1699, 4),
        ("SSMB-8QT", "8 Quart", 2199, 12),
    ]),
    product("Commercial Degreaser Spray", "Heavy-duty kitchen degreaser. Cuts through grease on contact.", "Kitchen Supplies", 34, &[
        ("CDS-32OZ", "32 oz spray bottle", 799, 85),
        ("CDS-1GAL", "1 gallon refill", 1999, 25),
    ]),
];

/// Row counts after seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: i64,
    pub products: i64,
    pub deleted_products: i64,
    pub variants: i64,
}

/// Drop all catalog data and load the sample catalog in one transaction.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    reset_schema(pool).await?;

    let mut tx = pool.begin().await?;
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let id = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
            .bind(*name)
            .bind(*description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        category_ids.push((*name, id));
    }

    for p in PRODUCTS {
        let category_id = category_ids
            .iter()
            .find(|(name, _)| *name == p.category)
            .map(|(_, id)| *id);
        let age = format!("-{} days", p.days_ago);
        let product_id = sqlx::query(
            "INSERT INTO products (name, description, category_id, status, deleted_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, CASE WHEN ? THEN datetime('now') END, datetime('now', ?), datetime('now', ?))",
        )
        .bind(p.name)
        .bind(p.description)
        .bind(category_id)
        .bind(p.status)
        .bind(p.deleted)
        .bind(age.as_str())
        .bind(age.as_str())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for (sku, name, price_cents, inventory_count) in p.variants {
            sqlx::query(
                "INSERT INTO variants (product_id, sku, name, price_cents, inventory_count) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(product_id)
            .bind(*sku)
            .bind(*name)
            .bind(*price_cents)
            .bind(*inventory_count)
            .execute(&mut *tx)
            .await?;
        }
    }
    tx.commit().await?;

    let report = SeedReport {
        categories: count(pool, "SELECT COUNT(*) FROM categories").await?,
        products: count(pool, "SELECT COUNT(*) FROM products").await?,
        deleted_products: count(pool, "SELECT COUNT(*) FROM products WHERE deleted_at IS NOT NULL").await?,
        variants: count(pool, "SELECT COUNT(*) FROM variants").await?,
    };
    tracing::info!(
        categories = report.categories,
        products = report.products,
        deleted = report.deleted_products,
        variants = report.variants,
        "catalog seeded"
    );
    Ok(report)
}

async fn count(pool: &SqlitePool, sql: &str) -> Result<i64, AppError> {
    let n: i64 = sqlx::query_scalar(sql).fetch_one(pool).await?;
    Ok(n)
}
