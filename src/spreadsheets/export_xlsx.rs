use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, XlsxError};

const HEADERS: [&str; 14] = [
    "ID",
    "Title",
    "Address",
    "City",
    "State",
    "Zip",
    "Type",
    "Price",
    "Beds",
    "Baths",
    "Sq Ft",
    "Year Built",
    "Status",
    "Features",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::Xlsx(format!("Failed to write {what}: {e}"))
}

/// Writes one header row plus one row per listing, in result order.
pub fn build_listings_workbook(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.id as f64)
            .map_err(xlsx_err("id"))?;
        worksheet
            .write_string(r, 1, &listing.title)
            .map_err(xlsx_err("title"))?;
        worksheet
            .write_string(r, 2, &listing.address)
            .map_err(xlsx_err("address"))?;
        worksheet
            .write_string(r, 3, &listing.city)
            .map_err(xlsx_err("city"))?;
        worksheet
            .write_string(r, 4, &listing.state)
            .map_err(xlsx_err("state"))?;
        worksheet
            .write_string(r, 5, &listing.zip_code)
            .map_err(xlsx_err("zip code"))?;
        worksheet
            .write_string(r, 6, listing.property_type.as_str())
            .map_err(xlsx_err("property type"))?;
        worksheet
            .write_number(r, 7, listing.price as f64)
            .map_err(xlsx_err("price"))?;
        worksheet
            .write_number(r, 8, listing.bedrooms as f64)
            .map_err(xlsx_err("bedrooms"))?;
        worksheet
            .write_number(r, 9, listing.bathrooms)
            .map_err(xlsx_err("bathrooms"))?;

        // Blank cells rather than zeros for unknown values
        if listing.square_feet > 0 {
            worksheet
                .write_number(r, 10, listing.square_feet as f64)
                .map_err(xlsx_err("square feet"))?;
        }
        if let Some(year) = listing.year_built {
            worksheet
                .write_number(r, 11, year as f64)
                .map_err(xlsx_err("year built"))?;
        }

        worksheet
            .write_string(r, 12, listing.status.as_str())
            .map_err(xlsx_err("status"))?;
        worksheet
            .write_string(r, 13, listing.features.join(", "))
            .map_err(xlsx_err("features"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::Xlsx(format!("Failed to save workbook: {e}")))
}

pub fn export_listings_xlsx(listings: &[&Listing]) -> ResultResp {
    let buffer = build_listings_workbook(listings)?;
    xlsx_response(buffer, "listings.xlsx")
}
