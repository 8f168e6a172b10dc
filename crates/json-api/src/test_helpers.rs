//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use comp_harbor_app::{
    context::AppContext,
    domain::{
        brands::MockBrandsService, carts::MockCartsService, products::MockProductsService,
    },
};

use crate::state::State;

fn strict_brands_mock() -> MockBrandsService {
    let mut brands = MockBrandsService::new();

    brands.expect_list_brands().never();
    brands.expect_create_brand().never();

    brands
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_list_products().never();
    products.expect_list_products_by_brand().never();
    products.expect_get_product().never();
    products.expect_replace_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart_entry().never();
    carts.expect_list_cart_entries().never();
    carts.expect_list_cart_entries_by_user().never();
    carts.expect_delete_cart_entry().never();
    carts.expect_list_cart_products().never();

    carts
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn brands_service(brands: MockBrandsService, route: Router) -> Service {
    service(
        AppContext {
            brands: Arc::new(brands),
            products: Arc::new(strict_products_mock()),
            carts: Arc::new(strict_carts_mock()),
        },
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            brands: Arc::new(strict_brands_mock()),
            products: Arc::new(products),
            carts: Arc::new(strict_carts_mock()),
        },
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        AppContext {
            brands: Arc::new(strict_brands_mock()),
            products: Arc::new(strict_products_mock()),
            carts: Arc::new(carts),
        },
        route,
    )
}
