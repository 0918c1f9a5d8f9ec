use paramex::{VehicleFamily, doc_links};

#[test]
fn rc1_min_links_hit_all_five_vehicle_pages() {
    let links = doc_links("RC1_MIN").expect("resolve RC1_MIN");

    let expected = [
        (
            VehicleFamily::Plane,
            "https://ardupilot.org/plane/docs/parameters.html#rc1-min",
        ),
        (
            VehicleFamily::Copter,
            "https://ardupilot.org/copter/docs/parameters.html#rc1-min",
        ),
        (
            VehicleFamily::Rover,
            "https://ardupilot.org/rover/docs/parameters.html#rc1-min",
        ),
        (
            VehicleFamily::Sub,
            "https://ardupilot.org/sub/docs/parameters.html#rc1-min",
        ),
        (
            VehicleFamily::AntennaTracker,
            "https://ardupilot.org/antennatracker/docs/parameters.html#rc1-min",
        ),
    ];

    assert_eq!(links.len(), expected.len());
    for ((family, url), (want_family, want_url)) in links.iter().zip(expected.iter()) {
        assert_eq!(family, want_family);
        assert_eq!(url, want_url);
    }
}

#[test]
fn multi_underscore_names_hyphenate_fully() {
    let links = doc_links("COMPASS_OFS_X").expect("resolve COMPASS_OFS_X");
    for (_, url) in &links {
        assert!(url.ends_with("#compass-ofs-x"), "unexpected url {url}");
    }
}

#[test]
fn resolution_is_bit_exact_reproducible() {
    let first = doc_links("ATC_RAT_RLL_P").expect("first resolve");
    let second = doc_links("ATC_RAT_RLL_P").expect("second resolve");
    assert_eq!(first, second);
}

#[test]
fn empty_name_is_rejected() {
    assert!(matches!(
        doc_links(""),
        Err(paramex::Error::InvalidArgument(_))
    ));
}
