//! Text rendering of the console screens.

use common::{pagination::PageInfo, price::PriceRange};
use service::{
    domain::{Accessory, User, Vehicle},
    listing::{Inventory, Listing, Users},
};

/// Renders the [`User`]s [`Listing`] as a table.
#[must_use]
pub fn users(listing: &Listing<Users>) -> String {
    let draft = listing.draft();
    let mut lines = vec![format!(
        "Users | search: {} | role: {} ({})",
        draft.search_term().unwrap_or("-"),
        draft
            .filter()
            .role
            .map_or_else(|| "all".to_owned(), |r| r.to_string()),
        listing.phase(),
    )];

    lines.push(format!(
        "{:<6} {:<20} {:<24} {:<32} {:<10} {}",
        "ID", "Username", "Full name", "Email", "Role", "Status",
    ));
    lines.extend(listing.items().iter().map(user_row));
    if listing.items().is_empty() && listing.result().is_some() {
        lines.push("No users found".to_owned());
    }

    lines.push(footer(listing.page_info(), listing.is_loading()));
    lines.join("\n")
}

/// Renders a single table row of the provided [`User`].
fn user_row(user: &User) -> String {
    let profile = &user.profile;
    format!(
        "{:<6} {:<20} {:<24} {:<32} {:<10} {}",
        user.id,
        profile.username,
        profile.full_name,
        profile.email,
        profile.role,
        if profile.is_active { "Active" } else { "Inactive" },
    )
}

/// Renders the [`Vehicle`]s [`Listing`] as cards.
#[must_use]
pub fn inventory(listing: &Listing<Inventory>) -> String {
    let draft = listing.draft().filter();
    let mut lines = vec![format!(
        "Inventory | brand: {} | price: {} | fuel: {} ({})",
        draft.brand.as_deref().unwrap_or("all"),
        draft
            .price_range
            .as_ref()
            .map_or_else(|| "all".to_owned(), PriceRange::label),
        draft.fuel_type.as_deref().unwrap_or("all"),
        listing.phase(),
    )];

    if let Some(page) = listing.result() {
        let facets = &page.meta;
        if !facets.brands.is_empty() {
            lines.push(format!("Brands: {}", facets.brands.join(", ")));
        }
        if !facets.fuel_types.is_empty() {
            lines.push(format!(
                "Fuel types: {}",
                facets.fuel_types.join(", "),
            ));
        }
    }
    lines.push(format!(
        "Price ranges: {}",
        PriceRange::presets()
            .iter()
            .map(|r| format!("{r} ({})", r.label()))
            .collect::<Vec<_>>()
            .join(", "),
    ));

    lines.extend(listing.items().iter().map(vehicle_card));
    if listing.items().is_empty() && listing.result().is_some() {
        lines.push("No vehicles found".to_owned());
    }

    lines.push(footer(listing.page_info(), listing.is_loading()));
    lines.join("\n")
}

/// Renders a card of the provided [`Vehicle`].
fn vehicle_card(vehicle: &Vehicle) -> String {
    let title = match vehicle.year {
        Some(year) => format!("#{} {} ({year})", vehicle.id, vehicle.title()),
        None => format!("#{} {}", vehicle.id, vehicle.title()),
    };

    let details = [
        Some(
            vehicle.price.map_or_else(
                || "Price on request".to_owned(),
                |p| p.to_string(),
            ),
        ),
        vehicle.mileage.as_ref().map(ToString::to_string),
        vehicle.fuel_type.clone(),
        vehicle.transmission.clone(),
        Some(
            if vehicle.is_in_stock() { "In stock" } else { "Out of stock" }
                .to_owned(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    format!("{title}\n    {}", details.join(" | "))
}

/// Renders the pagination controls of the provided [`PageInfo`].
#[must_use]
pub fn pagination(info: PageInfo) -> String {
    let previous = if info.has_previous_page() {
        "< Previous"
    } else {
        "(Previous)"
    };
    let next = if info.has_next_page() {
        "Next >"
    } else {
        "(Next)"
    };
    let numbers = info
        .numbers()
        .map(|n| {
            if n == info.current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{info}\n{previous} | {numbers} | {next}")
}

/// Renders the footer of a listing.
fn footer(info: PageInfo, loading: bool) -> String {
    let controls = pagination(info);
    if loading {
        format!("{controls}\nLoading...")
    } else {
        controls
    }
}

/// Renders details of the provided [`User`].
#[must_use]
pub fn user(user: &User) -> String {
    let p = &user.profile;
    [
        format!("User #{}", user.id),
        format!("Username:   {}", p.username),
        format!("Full name:  {}", p.full_name),
        format!("Email:      {}", p.email),
        format!("Role:       {}", p.role),
        format!("Department: {}", p.department.as_deref().unwrap_or("-")),
        format!(
            "Phone:      {}",
            p.phone_number
                .as_ref()
                .map_or_else(|| "-".to_owned(), ToString::to_string),
        ),
        format!("Address:    {}", p.address.as_deref().unwrap_or("-")),
        format!("Active:     {}", if p.is_active { "yes" } else { "no" }),
    ]
    .join("\n")
}

/// Renders details of the provided [`Accessory`].
#[must_use]
pub fn accessory(accessory: &Accessory) -> String {
    let d = &accessory.details;
    [
        format!("Accessory #{}", accessory.id),
        format!("Name:         {}", d.name),
        format!("Category:     {}", d.category),
        format!("Price:        {}", d.price),
        format!("In stock:     {}", d.stock_quantity),
        format!("Description:  {}", d.description.as_deref().unwrap_or("-")),
        format!("Part number:  {}", d.part_number.as_deref().unwrap_or("-")),
        format!("Manufacturer: {}", d.manufacturer.as_deref().unwrap_or("-")),
        format!("Active:       {}", if d.is_active { "yes" } else { "no" }),
    ]
    .join("\n")
}
