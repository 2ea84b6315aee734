//! End-to-end tests: file listing → classification → resolution → graph.

use std::path::PathBuf;

use texture_material::model::config::DisplacementUsage;
use texture_material::model::graph::PinId;
use texture_material::nodes::{NodeKind, socket};
use texture_material::pipeline::{self, classify, resolve};
use texture_material::{Channel, ImportConfiguration, ImportService, LibraryError, MaterialGraph};

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from("/tmp/extract").join(n)).collect()
}

const SCENARIO_A: [&str; 7] = [
    "bark_brown_02_spec_1k.png",
    "bark_brown_02_disp_1k.png",
    "bark_brown_02_ao_1k.png",
    "bark_brown_02_diff_1k.png",
    "bark_brown_02_bump_1k.png",
    "bark_brown_02_rough_1k.png",
    "bark_brown_02_nor_1k.png",
];

const SCENARIO_B: [&str; 5] = [
    "Bark02_AO.jpg",
    "Bark02_col.jpg",
    "Bark02_disp.jpg",
    "Bark02_nrm.jpg",
    "Bark02_rgh.jpg",
];

const ALL_CHANNELS: [&str; 8] = [
    "set_diff.png",
    "set_ao.png",
    "set_spec.png",
    "set_rough.png",
    "set_mask.png",
    "set_nor.png",
    "set_bump.png",
    "set_disp.png",
];

#[test]
fn test_scenario_a_default_configuration() {
    let result = ImportService::default()
        .import_files("bark_brown_02_1k", &paths(&SCENARIO_A), &ImportConfiguration::default())
        .unwrap();

    assert_eq!(result.assignment.basename, "bark_brown_02");
    assert_eq!(
        result.assignment.included_channels(),
        vec![Channel::Diffuse, Channel::Normal, Channel::Roughness, Channel::Specular]
    );
    assert_eq!(result.assignment.active_geometry, Some(Channel::Normal));

    let nodes = &result.material.nodes;
    let graph = &result.material.graph;
    assert_eq!(graph.nodes_of_kind(NodeKind::ImageTexture).len(), 4);
    let image = |channel: Channel| nodes.images[&channel];
    assert!(graph.is_connected(
        image(Channel::Diffuse),
        socket::COLOR,
        nodes.shader,
        socket::BASE_COLOR
    ));
    assert!(graph.is_connected(
        image(Channel::Specular),
        socket::COLOR,
        nodes.shader,
        socket::SPECULAR
    ));
    assert!(graph.is_connected(
        image(Channel::Roughness),
        socket::COLOR,
        nodes.shader,
        socket::ROUGHNESS
    ));
    let normal_map = nodes.converters[&Channel::Normal];
    assert!(graph.is_connected(
        image(Channel::Normal),
        socket::COLOR,
        normal_map,
        socket::COLOR
    ));
    assert!(graph.is_connected(normal_map, socket::NORMAL, nodes.shader, socket::NORMAL));
    assert!(graph
        .get_input_connection(&PinId::new(nodes.output.0, socket::DISPLACEMENT))
        .is_none());
}

#[test]
fn test_scenario_b_with_ambient_occlusion() {
    let config = ImportConfiguration {
        include_ambient_occlusion: true,
        ..Default::default()
    };
    let result = ImportService::default()
        .import_files("Bark02", &paths(&SCENARIO_B), &config)
        .unwrap();

    assert_eq!(
        result.assignment.included_channels(),
        vec![Channel::AmbientOcclusion, Channel::Diffuse, Channel::Normal, Channel::Roughness]
    );
    assert!(!result.assignment.contains(Channel::Displacement));
}

#[test]
fn test_priority_reorder_changes_only_geometry() {
    let files = paths(&SCENARIO_A);
    let set = classify(&files).unwrap();

    let normal_first = resolve(&set, &ImportConfiguration::default()).unwrap();
    let bump_first = resolve(
        &set,
        &ImportConfiguration {
            geometry_priority: vec![Channel::Bump, Channel::Normal, Channel::Displacement],
            ..Default::default()
        },
    )
    .unwrap();
    let disp_first = resolve(
        &set,
        &ImportConfiguration {
            geometry_priority: vec![Channel::Displacement, Channel::Normal],
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(normal_first.active_geometry, Some(Channel::Normal));
    assert_eq!(bump_first.active_geometry, Some(Channel::Bump));
    assert_eq!(disp_first.active_geometry, Some(Channel::Displacement));

    for other in [&bump_first, &disp_first] {
        for channel in [Channel::Diffuse, Channel::Roughness, Channel::Specular] {
            assert_eq!(other.get(channel), normal_first.get(channel));
        }
        assert_eq!(other.channels.len(), normal_first.channels.len());
    }
}

#[test]
fn test_load_unused_maps_wires_one_geometry_channel() {
    let config = ImportConfiguration {
        load_unused_maps: true,
        ..Default::default()
    };
    let result = ImportService::default()
        .import_files("bark", &paths(&SCENARIO_A), &config)
        .unwrap();
    let nodes = &result.material.nodes;
    let graph = &result.material.graph;

    for channel in Channel::GEOMETRY {
        assert!(nodes.images.contains_key(&channel), "missing {}", channel);
    }

    let normal_wired = graph.is_connected(
        nodes.converters[&Channel::Normal],
        socket::NORMAL,
        nodes.shader,
        socket::NORMAL,
    );
    let bump_wired = graph.outgoing(nodes.converters[&Channel::Bump]).count() > 0;
    let disp_wired = graph.is_connected(
        nodes.images[&Channel::Displacement],
        socket::COLOR,
        nodes.output,
        socket::DISPLACEMENT,
    );
    assert_eq!(
        [normal_wired, bump_wired, disp_wired].iter().filter(|w| **w).count(),
        1
    );
    assert!(normal_wired);
}

#[test]
fn test_unknown_suffix_only_loaded_with_flag() {
    let names = ["bark_diff_1k.png", "bark_arm_1k.png"];

    let plain = ImportService::default()
        .import_files("bark", &paths(&names), &ImportConfiguration::default())
        .unwrap();
    assert!(plain.assignment.unused.is_empty());
    assert_eq!(plain.material.graph.nodes_of_kind(NodeKind::ImageTexture).len(), 1);

    let config = ImportConfiguration {
        load_unused_maps: true,
        ..Default::default()
    };
    let loaded = ImportService::default()
        .import_files("bark", &paths(&names), &config)
        .unwrap();
    assert_eq!(loaded.assignment.unused.len(), 1);
    let extra = loaded.material.nodes.extras[0];
    assert_eq!(loaded.material.graph.outgoing(extra).count(), 0);
    assert!(loaded.material.graph.is_connected(
        loaded.material.nodes.routing,
        socket::OUTPUT,
        extra,
        socket::VECTOR
    ));
}

#[test]
fn test_single_mapping_and_routing_for_any_channel_count() {
    let config = ImportConfiguration {
        include_ambient_occlusion: true,
        load_unused_maps: true,
        ..Default::default()
    };
    for n in 1..=ALL_CHANNELS.len() {
        let result = ImportService::default()
            .import_files("set", &paths(&ALL_CHANNELS[..n]), &config)
            .unwrap();
        let graph = &result.material.graph;
        let nodes = &result.material.nodes;

        assert_eq!(result.assignment.channels.len(), n);
        assert_eq!(graph.nodes_of_kind(NodeKind::TextureCoordinate).len(), 1);
        assert_eq!(graph.nodes_of_kind(NodeKind::Mapping).len(), 1);
        assert_eq!(graph.nodes_of_kind(NodeKind::Reroute).len(), 1);
        for image in nodes.image_nodes() {
            assert!(graph.is_connected(nodes.routing, socket::OUTPUT, image, socket::VECTOR));
        }
    }
}

#[test]
fn test_alpha_and_metal_maps_wire_into_shader() {
    let result = ImportService::default()
        .import_files(
            "leaf",
            &paths(&["leaf_col.png", "leaf_met.png", "leaf_mask.png"]),
            &ImportConfiguration::default(),
        )
        .unwrap();
    let nodes = &result.material.nodes;
    let graph = &result.material.graph;

    assert_eq!(
        result.assignment.included_channels(),
        vec![Channel::Alpha, Channel::Diffuse, Channel::Specular]
    );
    assert!(graph.is_connected(
        nodes.images[&Channel::Alpha],
        socket::COLOR,
        nodes.shader,
        socket::ALPHA
    ));
    assert!(graph.is_connected(
        nodes.images[&Channel::Specular],
        socket::COLOR,
        nodes.shader,
        socket::SPECULAR
    ));
    assert_eq!(result.assignment.get(Channel::Specular).unwrap().raw_suffix, "met");
}

#[test]
fn test_basename_mismatch_creates_nothing() {
    let mut graph = MaterialGraph::new();
    let files = paths(&["bark_diff.png", "rock_nor.png"]);
    let result = pipeline::run("bark", &files, &ImportConfiguration::default(), &mut graph);

    assert!(matches!(result, Err(LibraryError::BasenameMismatch { .. })));
    assert!(graph.nodes.is_empty());
}

#[test]
fn test_no_recognized_components() {
    let files = paths(&["readme.txt", "preview.jpg"]);
    let result =
        ImportService::default().import_files("x", &files, &ImportConfiguration::default());
    assert!(matches!(result, Err(LibraryError::NoRecognizedComponents)));
}

#[test]
fn test_displacement_only_archive() {
    let files = paths(&["cliff_disp_8k.exr"]);
    let disabled = ImportConfiguration {
        displacement_usage: DisplacementUsage::Disabled,
        ..Default::default()
    };
    assert!(matches!(
        ImportService::default().import_files("cliff", &files, &disabled),
        Err(LibraryError::NoRecognizedComponents)
    ));

    let result = ImportService::default()
        .import_files("cliff", &files, &ImportConfiguration::default())
        .unwrap();
    assert_eq!(result.assignment.active_geometry, Some(Channel::Displacement));
}

#[test]
fn test_material_serializes_to_json() {
    let result = ImportService::default()
        .import_files("Bark02", &paths(&SCENARIO_B), &ImportConfiguration::default())
        .unwrap();
    let json = result.material.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Bark02");
    assert_eq!(
        value["graph"]["nodes"].as_array().unwrap().len(),
        result.material.graph.nodes.len()
    );
}
