use crate::catalog::Catalog;
use crate::domain::filter::DEFAULT_MAX_PRICE;
use crate::domain::listing::{Listing, ListingStatus, PropertyType};
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// A plain three-bed house; tests tweak the fields they care about.
pub fn listing(id: u32, address: &str, city: &str, price: i64) -> Listing {
    Listing {
        id,
        title: format!("Listing {id}"),
        address: address.to_string(),
        city: city.to_string(),
        state: "TX".to_string(),
        zip_code: "78701".to_string(),
        price,
        bedrooms: 3,
        bathrooms: 2.0,
        square_feet: 1500,
        property_type: PropertyType::Residential,
        image: String::new(),
        description: String::new(),
        features: Vec::new(),
        year_built: None,
        lot_size: None,
        status: ListingStatus::ForSale,
    }
}

pub fn sample_listings() -> Vec<Listing> {
    let mut family = listing(1, "1420 Willow Creek Dr", "Austin", 485_000);
    family.bedrooms = 4;
    family.bathrooms = 3.0;
    family.year_built = Some(2018);

    let mut loft = listing(2, "200 Congress Ave #1104", "Austin", 389_000);
    loft.property_type = PropertyType::Condo;
    loft.bedrooms = 1;
    loft.bathrooms = 1.0;
    loft.year_built = Some(2015);

    let mut lakeside = listing(3, "88 Lakeshore Blvd", "Lakeway", 925_000);
    lakeside.bedrooms = 5;
    lakeside.bathrooms = 4.5;
    lakeside.year_built = Some(2009);

    let mut starter = listing(4, "5512 Pecan St", "Round Rock", 265_000);
    starter.status = ListingStatus::Pending;
    starter.year_built = Some(1998);

    let mut land = listing(5, "FM 1826 Tract 7", "Dripping Springs", 175_000);
    land.property_type = PropertyType::Land;
    land.bedrooms = 0;
    land.bathrooms = 0.0;
    land.square_feet = 0;

    let mut townhome = listing(6, "11800 Alterra Pkwy #12", "Austin", 359_000);
    townhome.property_type = PropertyType::Townhouse;
    townhome.bathrooms = 2.5;
    townhome.year_built = Some(2020);

    let mut garden = listing(7, "4700 Spicewood Springs Rd #210", "Austin", 215_000);
    garden.property_type = PropertyType::Condo;
    garden.bedrooms = 2;
    garden.bathrooms = 1.0;
    garden.year_built = Some(1984);

    let mut ranch = listing(8, "77 Lakeview Ct", "Cedar Park", 430_000);
    ranch.bedrooms = 4;
    ranch.year_built = Some(2006);

    vec![family, loft, lakeside, starter, land, townhome, garden, ranch]
}

pub fn test_state() -> AppState {
    AppState {
        catalog: Catalog::from_listings(sample_listings()).expect("sample ids are unique"),
        default_max_price: DEFAULT_MAX_PRICE,
    }
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, state).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
