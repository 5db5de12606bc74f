mod common;

use std::collections::HashMap;
use std::sync::Arc;

use spatialctx::distance::{Cartesian, Haversine, LawOfCosines};
use spatialctx::{
    AnyShape, DistanceCalc, Extent, GEO, Shape, ShapeCodec, ShapeKind, SpatialContext,
    SpatialContextFactory,
};

use common::TestCodec;

fn planar() -> Arc<SpatialContext> {
    SpatialContextFactory::new().geo(false).build().unwrap()
}

fn wrapping() -> Arc<SpatialContext> {
    SpatialContextFactory::new()
        .norm_wrap_longitude(true)
        .build()
        .unwrap()
}

#[test]
fn verify_x_accepts_the_whole_world_range() {
    let mut x = -180.0;
    while x <= 180.0 {
        assert!(GEO.verify_x(x).is_ok(), "{x}");
        x += 7.5;
    }
    for bad in [-180.000001, 180.000001, -1000.0, f64::INFINITY] {
        assert!(GEO.verify_x(bad).unwrap_err().is_invalid_shape(), "{bad}");
    }
    assert!(GEO.verify_x(f64::NAN).is_ok());
}

#[test]
fn norm_x_is_idempotent() {
    let ctx = wrapping();
    assert_eq!(ctx.norm_x(181.0), -179.0);
    assert_eq!(ctx.norm_x(-181.0), 179.0);
    let mut x = -1000.0;
    while x <= 1000.0 {
        let once = ctx.norm_x(x);
        assert_eq!(ctx.norm_x(once), once, "{x}");
        assert!((-180.0..=180.0).contains(&once), "{x} -> {once}");
        x += 13.25;
    }
}

#[test]
fn rectangle_touching_the_dateline_does_not_cross_it() {
    let r = GEO.make_rectangle(180.0, -170.0, -10.0, 10.0).unwrap();
    assert_eq!((r.min_x(), r.max_x()), (-180.0, -170.0));
    assert!(!r.crosses_dateline());
}

#[test]
fn planar_rectangle_needs_ordered_x() {
    let err = planar().make_rectangle(10.0, 5.0, -10.0, 10.0).unwrap_err();
    assert!(err.is_invalid_shape());
}

#[test]
fn circle_radius_clamps_only_when_geodetic() {
    let center = GEO.make_point(0.0, 0.0).unwrap();
    assert_eq!(GEO.make_circle(center, 200.0).unwrap().radius(), 180.0);

    let ctx = planar();
    let center = ctx.make_point(0.0, 0.0).unwrap();
    assert_eq!(ctx.make_circle(center, 200.0).unwrap().radius(), 200.0);
}

#[test]
fn negative_radius_fails_in_both_modes() {
    for ctx in [Arc::clone(&GEO), planar()] {
        let center = ctx.make_point(0.0, 0.0).unwrap();
        assert!(ctx.make_circle(center, -1.0).unwrap_err().is_invalid_shape());
    }
}

#[test]
#[allow(deprecated)]
fn builder_and_legacy_paths_agree() {
    for geo in [true, false] {
        let built = SpatialContextFactory::new().geo(geo).build().unwrap();
        let legacy = SpatialContext::from_legacy(geo, None, None).unwrap();
        assert_eq!(*built, *legacy);
        assert_eq!(*SpatialContext::with_geo(geo), *built);
    }

    let built = SpatialContextFactory::new()
        .distance_calculator(LawOfCosines)
        .build()
        .unwrap();
    let legacy = SpatialContext::from_legacy(true, Some(LawOfCosines.into()), None).unwrap();
    assert_eq!(*built, *legacy);
}

#[test]
fn from_args_matches_the_builder() {
    let args: HashMap<String, String> = [
        ("geo", "false"),
        ("distCalculator", "cartesian"),
        ("worldBounds", "-500 -200 500 200"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let from_args = SpatialContext::from_args(&args).unwrap();
    let built = SpatialContextFactory::new()
        .geo(false)
        .distance_calculator(Cartesian::new())
        .world_bounds(Extent::new(-500.0, 500.0, -200.0, 200.0))
        .build()
        .unwrap();
    assert_eq!(*from_args, *built);
    assert!(from_args.make_point(501.0, 0.0).is_err());
}

#[test]
fn geo_is_shared_and_named() {
    assert!(Arc::ptr_eq(&GEO, &GEO.world_bounds().context().clone()));
    assert_eq!(GEO.to_string(), "SpatialContext.GEO");
    // an equal context built separately is not the shared instance
    let other = SpatialContextFactory::new().build().unwrap();
    assert_eq!(*other, **GEO);
    assert!(other.to_string().starts_with("SpatialContext{geo=true"));
}

#[test]
fn haversine_distance_in_degrees() {
    let origin = GEO.make_point(0.0, 0.0).unwrap();
    let north = GEO.make_point(0.0, 10.0).unwrap();
    assert_eq!(GEO.calculator(), &DistanceCalc::from(Haversine));
    assert!((GEO.distance_between(&origin, &north) - 10.0).abs() < 1e-9);
}

#[test]
#[allow(deprecated)]
fn codec_backs_the_legacy_text_calls() {
    let ctx = SpatialContextFactory::new()
        .shape_codec(Arc::new(TestCodec))
        .build()
        .unwrap();

    for text in ["-71.06 42.36", "-10 -5 10 5", "Circle(1 2 d=3)"] {
        let shape = ctx.read_shape(text).unwrap();
        assert_eq!(ctx.format_shape(&shape).unwrap(), text);
    }
    assert_eq!(ctx.read_shape("1 2").unwrap().kind(), ShapeKind::Point);
    assert!(ctx.read_shape("200 0").unwrap_err().is_invalid_shape());
    assert!(ctx.read_shape("1 2 3").unwrap_err().is_invalid_shape());

    let err = GEO.read_shape("1 2").unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[test]
fn mixed_collections() {
    let shapes: Vec<AnyShape> = vec![
        GEO.make_point(1.0, 2.0).unwrap().into(),
        TestCodec.read_shape(&GEO, "0 0 4 4").unwrap(),
    ];
    let coll = GEO.make_collection(shapes);
    assert!(coll.has_area());
    assert!(!coll.is_empty());
    let shape: AnyShape = coll.into();
    assert_eq!(shape.kind(), ShapeKind::Collection);
    insta::assert_snapshot!(
        shape.to_string(),
        @"ShapeCollection(Pt(x=1,y=2), Rect(minX=0,maxX=4,minY=0,maxY=4))"
    );
}
