use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

use crate::entities::{Container, Product};
use crate::geometry::Shape;
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtProduct, ExtShape};

/// Imports an instance into the library, validating every entity on the way.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<(Container, Vec<Product>)> {
    let container = import_container(&ext_instance.container).context("invalid container")?;
    let products: Vec<Product> = ext_instance
        .products
        .iter()
        .map(|ext_product| {
            import_product(ext_product)
                .with_context(|| format!("invalid product: {}", ext_product.id))
        })
        .try_collect()?;

    debug!(
        "imported instance {:?}: {} products into {:?}",
        ext_instance.name.as_deref().unwrap_or("-"),
        products.len(),
        container.name()
    );
    Ok((container, products))
}

pub fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    let container = Container::new(
        ext_container.length,
        ext_container.width,
        ext_container.height,
        ext_container.max_weight,
    )?
    .with_shelf_interval(ext_container.shelf_interval)?;

    Ok(match &ext_container.name {
        Some(name) => container.with_name(name),
        None => container,
    })
}

pub fn import_product(ext_product: &ExtProduct) -> Result<Product> {
    let shape = import_shape(&ext_product.shape)?;
    let mut product = Product::new(ext_product.id.as_str(), shape, ext_product.weight)?
        .with_fragile(ext_product.fragile)
        .with_stackable(ext_product.stackable);
    if let Some(name) = &ext_product.name {
        product = product.with_name(name);
    }
    if let Some(range) = &ext_product.allowed_orientations {
        product = product.with_orientations(range.clone())?;
    }
    Ok(product)
}

pub fn import_shape(ext_shape: &ExtShape) -> Result<Shape> {
    match *ext_shape {
        ExtShape::Cuboid {
            length,
            width,
            height,
        } => Shape::try_cuboid(length, width, height),
        ExtShape::Cylinder { radius, height } => Shape::try_cylinder(radius, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::OrientationRange;

    const INSTANCE: &str = r#"{
        "name": "mini",
        "container": { "length": 100, "width": 80, "height": 170, "max_weight": 300 },
        "products": [
            { "id": "BOX", "shape": { "type": "cuboid", "data": { "length": 40, "width": 30, "height": 20 } }, "weight": 10 },
            { "id": "CYL", "name": "Oil Drum", "shape": { "type": "cylinder", "data": { "radius": 10, "height": 35 } },
              "weight": 4.5, "fragile": true, "stackable": false, "allowed_orientations": { "type": "any" } },
            { "id": "FLAT", "shape": { "type": "cuboid", "data": { "length": 25, "width": 20, "height": 8 } }, "weight": 1.5,
              "allowed_orientations": { "type": "discrete", "data": ["upright", "on_side"] } }
        ]
    }"#;

    #[test]
    fn import_valid_instance() {
        let ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let (container, products) = import_instance(&ext).unwrap();
        assert_eq!(container.shelf_interval(), 20.0);
        assert_eq!(products.len(), 3);

        let cyl = &products[1];
        assert_eq!(cyl.name(), "Oil Drum");
        assert!(cyl.is_fragile());
        assert!(!cyl.is_stackable());
        assert_eq!(cyl.allowed_orientations(), &OrientationRange::Any);
        assert_eq!(products[0].name(), "BOX");
        assert!(products[0].is_stackable());
        assert_eq!(products[2].orientation_variants().len(), 2);
    }

    #[test]
    fn invalid_product_is_reported() {
        let ext: ExtInstance = serde_json::from_str(&INSTANCE.replace("\"weight\": 10", "\"weight\": -10")).unwrap();
        let err = import_instance(&ext).unwrap_err();
        assert!(format!("{err:#}").contains("BOX"));
    }
}
