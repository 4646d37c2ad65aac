use crate::entities::{Container, PackingResult, PlacedItem, Product};
use crate::geometry::Shape;
use crate::io::ext_repr::{
    ExtContainer, ExtInstance, ExtPackingResult, ExtPlacedItem, ExtProduct, ExtShape,
};

pub fn export_instance(
    name: Option<&str>,
    container: &Container,
    products: &[Product],
) -> ExtInstance {
    ExtInstance {
        name: name.map(str::to_owned),
        container: export_container(container),
        products: products.iter().map(export_product).collect(),
    }
}

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        name: Some(container.name().to_owned()),
        length: container.length(),
        width: container.width(),
        height: container.height(),
        max_weight: container.max_weight(),
        shelf_interval: container.shelf_interval(),
    }
}

pub fn export_product(product: &Product) -> ExtProduct {
    ExtProduct {
        id: product.id().to_owned(),
        name: (product.name() != product.id()).then(|| product.name().to_owned()),
        shape: export_shape(product.shape()),
        weight: product.weight(),
        fragile: product.is_fragile(),
        stackable: product.is_stackable(),
        allowed_orientations: Some(product.allowed_orientations().clone()),
    }
}

pub fn export_shape(shape: &Shape) -> ExtShape {
    match *shape {
        Shape::Cuboid {
            length,
            width,
            height,
        } => ExtShape::Cuboid {
            length,
            width,
            height,
        },
        Shape::Cylinder { radius, height } => ExtShape::Cylinder { radius, height },
    }
}

/// Exports a [`PackingResult`], keeping the placement order.
pub fn export_result(result: &PackingResult) -> ExtPackingResult {
    ExtPackingResult {
        strategy: result.strategy,
        strategy_index: result.strategy_index,
        placed_items: result.placed_items.iter().map(export_placed_item).collect(),
        unplaced: result.unplaced.iter().map(|p| p.id().to_owned()).collect(),
        total_weight: result.total_weight,
        utilization: result.utilization,
        timed_out: result.timed_out,
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        product_id: pi.product.id().to_owned(),
        position: (pi.position.x(), pi.position.y(), pi.position.z()),
        dims: (pi.dims.length, pi.dims.width, pi.dims.height),
        orientation: pi.orientation,
        band: pi.band,
        phase: pi.phase,
        fragile: pi.product.is_fragile(),
    }
}
