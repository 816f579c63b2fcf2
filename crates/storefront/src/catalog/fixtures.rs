//! Static catalog data.

use chrono::NaiveDate;
use tradehub_core::{Category, Localized, OrderId, Price, Product, ProductId, Specification};

use super::{OrderStatus, SellerOrder};

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            slug: "apparel",
            name: Localized::text("의류", "Apparel", "服装", "アパレル"),
        },
        Category {
            slug: "home-living",
            name: Localized::text("홈·리빙", "Home & Living", "家居生活", "ホーム・リビング"),
        },
        Category {
            slug: "beauty",
            name: Localized::text("뷰티", "Beauty", "美妆", "ビューティー"),
        },
        Category {
            slug: "food",
            name: Localized::text("식품", "Food", "食品", "食品"),
        },
    ]
}

#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            category: "apparel",
            name: Localized::text(
                "오가닉 코튼 티셔츠",
                "Organic Cotton T-Shirt",
                "有机棉T恤",
                "オーガニックコットンTシャツ",
            ),
            description: Localized::text(
                "부드러운 유기농 면으로 만든 데일리 티셔츠입니다.",
                "An everyday tee woven from soft organic cotton.",
                "采用柔软有机棉制成的日常T恤。",
                "やわらかなオーガニックコットンのデイリーTシャツ。",
            ),
            price_local: Price::krw(19_000),
            price_usd: Price::usd_cents(1_450),
            stock: 240,
            specification: Specification {
                size: "S / M / L / XL",
                material: Localized::text(
                    "유기농 면 100%",
                    "100% organic cotton",
                    "100% 有机棉",
                    "オーガニックコットン100%",
                ),
                colors: vec!["white", "black", "sand"],
                weight_grams: 180,
                width_mm: 520,
            },
            is_retail: true,
            is_wholesale: true,
            moq: 50,
        },
        Product {
            id: ProductId::new(2),
            category: "apparel",
            name: Localized::text("리넨 셔츠", "Linen Shirt", "亚麻衬衫", "リネンシャツ"),
            description: Localized::text(
                "통기성이 좋은 여름용 리넨 셔츠입니다.",
                "A breathable linen shirt for warm days.",
                "透气舒适的夏季亚麻衬衫。",
                "風通しのよい夏向けリネンシャツ。",
            ),
            price_local: Price::krw(49_000),
            price_usd: Price::usd_cents(3_700),
            stock: 12,
            specification: Specification {
                size: "M / L",
                material: Localized::text("리넨 100%", "100% linen", "100% 亚麻", "リネン100%"),
                colors: vec!["ivory", "sky"],
                weight_grams: 210,
                width_mm: 560,
            },
            is_retail: true,
            is_wholesale: false,
            moq: 1,
        },
        Product {
            id: ProductId::new(3),
            category: "home-living",
            name: Localized::text(
                "도자기 머그 세트",
                "Ceramic Mug Set",
                "陶瓷马克杯套装",
                "陶器マグセット",
            ),
            description: Localized::text(
                "이천 장인이 빚은 머그 4개 세트입니다.",
                "Four mugs thrown by ceramic artisans in Icheon.",
                "由利川陶艺匠人手工制作的四只马克杯。",
                "利川の職人が作ったマグカップ4個セット。",
            ),
            price_local: Price::krw(68_000),
            price_usd: Price::usd_cents(5_100),
            stock: 80,
            specification: Specification {
                size: "350ml",
                material: Localized::text("백자토", "White porcelain clay", "白瓷土", "白磁土"),
                colors: vec!["white", "celadon"],
                weight_grams: 1_400,
                width_mm: 90,
            },
            is_retail: true,
            is_wholesale: true,
            moq: 20,
        },
        Product {
            id: ProductId::new(4),
            category: "home-living",
            name: Localized::text(
                "대나무 수납 바구니",
                "Bamboo Storage Basket",
                "竹编收纳篮",
                "竹の収納かご",
            ),
            description: Localized::text(
                "담양 대나무로 엮은 업소용 수납 바구니입니다.",
                "Commercial-grade storage baskets woven from Damyang bamboo.",
                "采用潭阳竹子编织的商用收纳篮。",
                "潭陽の竹で編んだ業務用収納かご。",
            ),
            price_local: Price::krw(12_000),
            price_usd: Price::usd_cents(900),
            stock: 1_500,
            specification: Specification {
                size: "30 x 20 x 15 cm",
                material: Localized::text("대나무", "Bamboo", "竹", "竹"),
                colors: vec!["natural"],
                weight_grams: 450,
                width_mm: 300,
            },
            is_retail: false,
            is_wholesale: true,
            moq: 100,
        },
        Product {
            id: ProductId::new(5),
            category: "beauty",
            name: Localized::text(
                "녹차 수분 크림",
                "Green Tea Moisture Cream",
                "绿茶保湿霜",
                "緑茶モイスチャークリーム",
            ),
            description: Localized::text(
                "제주 녹차 추출물로 촉촉함을 채워줍니다.",
                "Hydrating cream with Jeju green tea extract.",
                "含济州绿茶提取物的保湿面霜。",
                "済州緑茶エキス配合の保湿クリーム。",
            ),
            price_local: Price::krw(32_000),
            price_usd: Price::usd_cents(2_400),
            stock: 0,
            specification: Specification {
                size: "50ml",
                material: Localized::text(
                    "녹차 추출물",
                    "Green tea extract",
                    "绿茶提取物",
                    "緑茶エキス",
                ),
                colors: vec![],
                weight_grams: 120,
                width_mm: 60,
            },
            is_retail: true,
            is_wholesale: true,
            moq: 200,
        },
        Product {
            id: ProductId::new(6),
            category: "beauty",
            name: Localized::text(
                "한방 시트 마스크",
                "Herbal Sheet Mask",
                "草本面膜",
                "韓方シートマスク",
            ),
            description: Localized::text(
                "인삼과 감초를 담은 시트 마스크 10매입니다.",
                "Ten sheet masks infused with ginseng and licorice.",
                "含人参和甘草的面膜，共10片。",
                "高麗人参と甘草配合のシートマスク10枚入り。",
            ),
            price_local: Price::krw(15_000),
            price_usd: Price::usd_cents(1_150),
            stock: 18,
            specification: Specification {
                size: "10 sheets",
                material: Localized::text("텐셀", "Tencel", "天丝", "テンセル"),
                colors: vec![],
                weight_grams: 250,
                width_mm: 180,
            },
            is_retail: true,
            is_wholesale: false,
            moq: 1,
        },
        Product {
            id: ProductId::new(7),
            category: "food",
            name: Localized::text("유자차", "Citron Tea", "柚子茶", "ゆず茶"),
            description: Localized::text(
                "고흥 유자로 담근 전통 유자청입니다.",
                "Traditional citron preserve from Goheung yuzu.",
                "采用高兴柚子腌制的传统柚子茶。",
                "高興産ゆずで漬けた伝統的なゆず茶。",
            ),
            price_local: Price::krw(9_800),
            price_usd: Price::usd_cents(750),
            stock: 600,
            specification: Specification {
                size: "1kg",
                material: Localized::text("유자, 설탕", "Yuzu, sugar", "柚子、砂糖", "ゆず、砂糖"),
                colors: vec![],
                weight_grams: 1_000,
                width_mm: 100,
            },
            is_retail: true,
            is_wholesale: true,
            moq: 120,
        },
        Product {
            id: ProductId::new(8),
            category: "food",
            name: Localized::text("김부각 스낵", "Seaweed Crisps", "海苔脆片", "海苔チップス"),
            description: Localized::text(
                "찹쌀풀을 발라 튀겨낸 바삭한 김부각입니다.",
                "Crispy seaweed coated in glutinous rice and fried.",
                "裹上糯米浆炸制的香脆海苔。",
                "もち米をまとわせて揚げたサクサクの海苔チップス。",
            ),
            price_local: Price::krw(4_500),
            price_usd: Price::usd_cents(350),
            stock: 3_000,
            specification: Specification {
                size: "40g",
                material: Localized::text(
                    "김, 찹쌀",
                    "Seaweed, glutinous rice",
                    "海苔、糯米",
                    "海苔、もち米",
                ),
                colors: vec![],
                weight_grams: 40,
                width_mm: 150,
            },
            is_retail: false,
            is_wholesale: true,
            moq: 500,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn orders() -> Vec<SellerOrder> {
    vec![
        SellerOrder {
            id: OrderId::new(10_423),
            product_id: ProductId::new(4),
            quantity: 300,
            status: OrderStatus::Paid,
            placed_on: date(2026, 10, 9),
        },
        SellerOrder {
            id: OrderId::new(10_417),
            product_id: ProductId::new(1),
            quantity: 120,
            status: OrderStatus::Shipped,
            placed_on: date(2026, 10, 4),
        },
        SellerOrder {
            id: OrderId::new(10_398),
            product_id: ProductId::new(7),
            quantity: 240,
            status: OrderStatus::Delivered,
            placed_on: date(2026, 9, 27),
        },
    ]
}
