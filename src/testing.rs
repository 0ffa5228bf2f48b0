// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Document;

/// A document with only an id and a name. Every other field is empty.
pub fn make_doc(id: &str, name: &str) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        ..Document::default()
    }
}

/// A document with all five scored fields filled in.
pub fn make_full_doc(
    id: &str,
    name: &str,
    description: &str,
    symptoms: &[&str],
    causes: &[&str],
    tags: &[&str],
) -> Document {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Document {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        symptoms: owned(symptoms),
        causes: owned(causes),
        tags: owned(tags),
        ..Document::default()
    }
}

/// A small poultry and livestock corpus for end-to-end tests and benches.
pub fn sample_corpus() -> Vec<Document> {
    let mut corpus = vec![
        make_full_doc(
            "newcastle",
            "Newcastle Disease",
            "Highly contagious viral disease of poultry",
            &["coughing", "twisted neck", "green diarrhea", "drop in egg production"],
            &["avian paramyxovirus"],
            &["viral", "notifiable"],
        ),
        make_full_doc(
            "coccidiosis",
            "Coccidiosis",
            "Parasitic infection of the intestinal tract",
            &["bloody diarrhea", "weight loss", "ruffled feathers"],
            &["eimeria protozoa"],
            &["parasitic"],
        ),
        make_full_doc(
            "fowl-pox",
            "Fowl Pox",
            "Slow spreading viral infection of chickens and turkeys",
            &["wart-like lesions", "reduced laying"],
            &["avipoxvirus", "mosquito bites"],
            &["viral", "skin"],
        ),
        make_full_doc(
            "mastitis",
            "Mastitis",
            "Inflammation of the udder, usually from bacterial infection",
            &["swollen udder", "abnormal milk", "fever"],
            &["staphylococcus", "streptococcus"],
            &["bacterial", "dairy"],
        ),
        make_full_doc(
            "foot-rot",
            "Foot Rot",
            "Hoof infection causing lameness in sheep and goats",
            &["limping", "foul smell from hoof"],
            &["dichelobacter nodosus"],
            &["bacterial", "hoof"],
        ),
    ];
    corpus[0].category = Some("Viral".into());
    corpus[0].severity = Some("high".into());
    corpus[0].species = vec!["Chickens".into(), "Turkeys".into()];
    corpus[3].species = vec!["Cattle".into(), "Goats".into()];
    corpus[4].species = vec!["Sheep".into(), "Goats".into()];
    corpus
}
