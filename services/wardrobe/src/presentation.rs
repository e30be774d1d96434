//! Display helpers shared by the page controllers

use chrono::{DateTime, Utc};

use crate::models::Dress;

const DEFAULT_IMAGE_TYPE: &str = "dress";

/// Stock picture for a lower-cased dress type
fn default_image(dress_type: &str) -> Option<&'static str> {
    let url = match dress_type {
        "shirt" => "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400&h=300&fit=crop&auto=format",
        "t-shirt" => "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=300&fit=crop&auto=format",
        "jeans" => "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400&h=300&fit=crop&auto=format",
        "saree" => "https://images.unsplash.com/photo-1583636919110-8c6bde3c9c89?w=400&h=300&fit=crop&auto=format",
        "kurti" => "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400&h=300&fit=crop&auto=format",
        "dress" => "https://images.unsplash.com/photo-1566174053879-31528523f8ae?w=400&h=300&fit=crop&auto=format",
        "skirt" => "https://images.unsplash.com/photo-1552902865-b72c031ac5ea?w=400&h=300&fit=crop&auto=format",
        "jacket" => "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400&h=300&fit=crop&auto=format",
        "sweater" => "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=400&h=300&fit=crop&auto=format",
        "trousers" => "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=400&h=300&fit=crop&auto=format",
        _ => return None,
    };
    Some(url)
}

/// The dress's own picture, else a stock one for its type
pub fn image_url(dress: &Dress) -> String {
    if let Some(image) = dress.image.as_deref().filter(|i| !i.trim().is_empty()) {
        return image.to_string();
    }

    default_image(&dress.dress_type.to_lowercase())
        .or_else(|| default_image(DEFAULT_IMAGE_TYPE))
        .unwrap_or_default()
        .to_string()
}

/// Icon class for a dress type
pub fn type_icon(dress_type: &str) -> &'static str {
    match dress_type.to_lowercase().as_str() {
        "jeans" | "trousers" | "jacket" | "sweater" => "fas fa-vest",
        "saree" | "kurti" | "skirt" => "fas fa-female",
        _ => "fas fa-tshirt",
    }
}

/// Hex badge colour for a colour name
pub fn color_badge(color: &str) -> &'static str {
    match color.to_lowercase().as_str() {
        "red" => "#f44336",
        "blue" => "#2196f3",
        "green" => "#4caf50",
        "black" => "#000000",
        "white" => "#ffffff",
        "yellow" => "#ffeb3b",
        "pink" => "#e91e63",
        "purple" => "#9c27b0",
        "orange" => "#ff9800",
        "brown" => "#795548",
        "gray" => "#9e9e9e",
        _ => "#ccc",
    }
}

/// Salutation for the hour of day (0-23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Long US date, e.g. "October 19, 2026"
pub fn format_added_date(created_at: Option<DateTime<Utc>>) -> Option<String> {
    created_at.map(|t| t.format("%B %-d, %Y").to_string())
}
