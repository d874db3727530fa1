//! Demo catalog and coupon seed data.

use crate::cart::{Coupon, CouponBook};
use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

/// Build the demo product catalog.
pub fn demo_catalog() -> Catalog {
    let c = Currency::USD;

    let products = vec![
        Product {
            id: "1".into(),
            name: "iPhone 15 Pro".to_string(),
            description: "El último iPhone con chip A17 Pro, cámara de 48MP y diseño en titanio."
                .to_string(),
            price: Money::new(120_000, c),
            original_price: Some(Money::new(129_900, c)),
            category: "Smartphones".to_string(),
            brand: "Apple".to_string(),
            stock: 15,
            rating: 4.8,
            reviews: 256,
            featured: true,
            on_sale: true,
            image: "assets/iphone-15-pro.jpg".to_string(),
        },
        Product {
            id: "2".into(),
            name: "MacBook Pro 14\"".to_string(),
            description: "Laptop profesional con chip M3, 16GB RAM y pantalla Liquid Retina XDR."
                .to_string(),
            price: Money::new(220_000, c),
            original_price: None,
            category: "Laptops".to_string(),
            brand: "Apple".to_string(),
            stock: 8,
            rating: 4.9,
            reviews: 180,
            featured: true,
            on_sale: false,
            image: "assets/macbook-pro.jpg".to_string(),
        },
        Product {
            id: "3".into(),
            name: "AirPods Pro 2".to_string(),
            description: "Auriculares inalámbricos con cancelación activa de ruido.".to_string(),
            price: Money::new(29_900, c),
            original_price: Some(Money::new(34_900, c)),
            category: "Accesorios".to_string(),
            brand: "Apple".to_string(),
            stock: 25,
            rating: 4.7,
            reviews: 420,
            featured: false,
            on_sale: true,
            image: "assets/airpods-pro.jpg".to_string(),
        },
        Product {
            id: "4".into(),
            name: "Samsung Galaxy S24 Ultra".to_string(),
            description: "Smartphone premium con S Pen y cámara de 200MP.".to_string(),
            price: Money::new(110_000, c),
            original_price: None,
            category: "Smartphones".to_string(),
            brand: "Samsung".to_string(),
            stock: 12,
            rating: 4.6,
            reviews: 312,
            featured: false,
            on_sale: false,
            image: "assets/galaxy-s24.jpg".to_string(),
        },
        Product {
            id: "5".into(),
            name: "Dell XPS 15".to_string(),
            description: "Laptop ultradelgada con pantalla InfinityEdge 4K.".to_string(),
            price: Money::new(180_000, c),
            original_price: None,
            category: "Laptops".to_string(),
            brand: "Dell".to_string(),
            stock: 6,
            rating: 4.5,
            reviews: 95,
            featured: true,
            on_sale: false,
            image: "assets/dell-xps.jpg".to_string(),
        },
        Product {
            id: "6".into(),
            name: "Sony WH-1000XM5".to_string(),
            description: "Auriculares over-ear con la mejor cancelación de ruido del mercado."
                .to_string(),
            price: Money::new(39_900, c),
            original_price: None,
            category: "Accesorios".to_string(),
            brand: "Sony".to_string(),
            stock: 18,
            rating: 4.8,
            reviews: 278,
            featured: false,
            on_sale: false,
            image: "assets/sony-headphones.jpg".to_string(),
        },
    ];

    // Seed ids are unique by construction
    Catalog::with_products(products).expect("demo catalog is valid")
}

/// Build the demo coupon book.
pub fn demo_coupons() -> CouponBook {
    let c = Currency::USD;
    CouponBook::with_coupons(vec![
        Coupon::percentage("BIENVENIDO", 10.0),
        Coupon::percentage("TECH20", 20.0).with_min_subtotal(Money::new(10_000, c)),
        Coupon::fixed("REGALO50", Money::new(5_000, c)).with_min_subtotal(Money::new(20_000, c)),
    ])
}
