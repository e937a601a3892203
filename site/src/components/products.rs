//! Products grid.

use leptos::prelude::*;

use crate::types::{Product, ProductsContent};

/// One product: photo, name and a one-line description.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <article class="product-card" data-product=product.id>
            <div class="product-image">
                <img src=product.image alt=product.name.clone() loading="lazy" />
            </div>
            <h3 class="product-name">{product.name}</h3>
            <p class="product-description">{product.description}</p>
        </article>
    }
}

/// The `#products` section.
#[component]
pub fn Products(products: ProductsContent) -> impl IntoView {
    view! {
        <section id="products" class="products">
            <div class="container fade-in">
                <h2 class="section-title">{products.title}</h2>
                <div class="products-grid">
                    {products
                        .items
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
