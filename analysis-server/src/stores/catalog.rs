//! Catalog Store
//!
//! Countries and products with their assignment links. Deleting a country
//! strips its id from every product's assignment list so the analysis
//! tables never see dangling references.

use dashmap::DashMap;
use shared::models::{
    Country, CountryCreate, CountryUpdate, Product, ProductCreate, ProductStatus, ProductUpdate,
};
use uuid::Uuid;

use crate::utils::{AppError, AppResult, ErrorCode};

/// In-memory catalog of countries and products
#[derive(Debug, Default)]
pub struct CatalogStore {
    countries: DashMap<String, Country>,
    products: DashMap<String, Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            countries: DashMap::new(),
            products: DashMap::new(),
        }
    }

    // ---- countries ----

    /// Create a country, rejecting duplicate names (case-insensitive)
    pub fn create_country(&self, req: CountryCreate) -> AppResult<Country> {
        if self
            .countries
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&req.name))
        {
            return Err(
                AppError::new(ErrorCode::CountryNameExists).with_detail("name", req.name.clone())
            );
        }

        let country = Country {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            currency: req.currency,
            iso_code: req.iso_code,
            default_shipping: req.default_shipping,
            default_cod: req.default_cod,
            default_return: req.default_return,
        };
        self.countries.insert(country.id.clone(), country.clone());
        Ok(country)
    }

    pub fn get_country(&self, id: &str) -> Option<Country> {
        self.countries.get(id).map(|c| c.clone())
    }

    /// All countries, sorted by name for stable listings
    pub fn list_countries(&self) -> Vec<Country> {
        let mut all: Vec<Country> = self.countries.iter().map(|c| c.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn update_country(&self, id: &str, update: CountryUpdate) -> AppResult<Country> {
        let mut entry = self
            .countries
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::CountryNotFound).with_detail("id", id))?;

        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(currency) = update.currency {
            entry.currency = currency;
        }
        if let Some(iso_code) = update.iso_code {
            entry.iso_code = iso_code;
        }
        if let Some(shipping) = update.default_shipping {
            entry.default_shipping = shipping;
        }
        if let Some(cod) = update.default_cod {
            entry.default_cod = cod;
        }
        if let Some(ret) = update.default_return {
            entry.default_return = ret;
        }
        Ok(entry.clone())
    }

    /// Remove a country and detach it from every product
    pub fn remove_country(&self, id: &str) -> AppResult<()> {
        self.countries
            .remove(id)
            .ok_or_else(|| AppError::new(ErrorCode::CountryNotFound).with_detail("id", id))?;

        for mut product in self.products.iter_mut() {
            product.country_ids.retain(|c| c != id);
        }
        Ok(())
    }

    // ---- products ----

    /// Create a product, rejecting duplicate SKUs (case-insensitive)
    pub fn create_product(&self, req: ProductCreate) -> AppResult<Product> {
        if self
            .products
            .iter()
            .any(|p| p.sku.eq_ignore_ascii_case(&req.sku))
        {
            return Err(
                AppError::new(ErrorCode::ProductSkuExists).with_detail("sku", req.sku.clone())
            );
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            sku: req.sku,
            name: req.name,
            status: req.status.unwrap_or_default(),
            cost: req.cost,
            price: req.price,
            country_ids: req.country_ids.unwrap_or_default(),
            image: req.image,
            video: req.video,
        };
        self.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.products.get(id).map(|p| p.clone())
    }

    /// All products, optionally filtered by status, sorted by SKU
    pub fn list_products(&self, status: Option<ProductStatus>) -> Vec<Product> {
        let mut all: Vec<Product> = self
            .products
            .iter()
            .filter(|p| status.is_none_or(|s| p.status == s))
            .map(|p| p.clone())
            .collect();
        all.sort_by(|a, b| a.sku.cmp(&b.sku));
        all
    }

    /// Products assigned to a country, sorted by SKU
    pub fn products_for_country(&self, country_id: &str) -> Vec<Product> {
        let mut assigned: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_assigned_to(country_id))
            .map(|p| p.clone())
            .collect();
        assigned.sort_by(|a, b| a.sku.cmp(&b.sku));
        assigned
    }

    pub fn update_product(&self, id: &str, update: ProductUpdate) -> AppResult<Product> {
        if let Some(new_sku) = &update.sku
            && self
                .products
                .iter()
                .any(|p| p.id != id && p.sku.eq_ignore_ascii_case(new_sku))
        {
            return Err(
                AppError::new(ErrorCode::ProductSkuExists).with_detail("sku", new_sku.clone())
            );
        }

        let mut entry = self
            .products
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;

        if let Some(sku) = update.sku {
            entry.sku = sku;
        }
        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(status) = update.status {
            entry.status = status;
        }
        if let Some(cost) = update.cost {
            entry.cost = cost;
        }
        if let Some(price) = update.price {
            entry.price = price;
        }
        if let Some(country_ids) = update.country_ids {
            entry.country_ids = country_ids;
        }
        if let Some(image) = update.image {
            entry.image = Some(image);
        }
        if let Some(video) = update.video {
            entry.video = Some(video);
        }
        Ok(entry.clone())
    }

    pub fn remove_product(&self, id: &str) -> AppResult<()> {
        self.products
            .remove(id)
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
        Ok(())
    }
}
