use csv::Reader;

use orbit_maneuvering::export::{self, plan::Metadata, trajectory};
use orbit_maneuvering::orbits::{Orbit, OrientedOrbit};
use orbit_maneuvering::report::trajectory_records;
use orbit_maneuvering::shared::constants::DEG;
use orbit_maneuvering::transfer::{execute_batch, plan};

const MU: f64 = 3.986_004_415_8e14;

fn baranov() -> (OrientedOrbit, Orbit) {
    let initial = Orbit::new(6_566e3, 0.00228, 20.0 * DEG, 0.0, 0.0).unwrap();
    let target = Orbit::new(6_721e3, 0.00149, 150.0 * DEG, 0.0, 0.0).unwrap();
    (OrientedOrbit::from_true(initial, 340.0 * DEG), target)
}

#[test]
fn trajectory_csv_round_trips_through_a_reader() {
    let (start, target) = baranov();
    let transfer = plan(&start.orbit, &target, MU).unwrap();
    let trajectory = execute_batch(&start, &transfer.maneuvers, 5.0 * DEG, MU).unwrap();
    let records = trajectory_records(&trajectory, MU);
    assert_eq!(records.len(), trajectory.len());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out/trajectory.csv");
    {
        let mut writer = export::writer_for_path(&path).unwrap();
        trajectory::write_all(writer.as_mut(), &records).unwrap();
    }

    let mut reader = Reader::from_path(&path).expect("csv reader");
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>().join(","), trajectory::HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), records.len());
    assert_eq!(&rows[0][1], "start");
    assert_eq!(&rows.last().unwrap()[1], "after_impulse");
    assert_eq!(&rows.last().unwrap()[2], "1");

    let impulses: Vec<&str> = rows
        .iter()
        .filter(|row| &row[1] == "before_impulse")
        .map(|row| &row[2])
        .collect();
    assert_eq!(impulses, ["0", "1"]);

    let swept: Vec<f64> = rows.iter().map(|row| row[3].parse().unwrap()).collect();
    assert!(swept.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn plan_sidecar_contains_case_and_maneuvers() {
    let (start, target) = baranov();
    let transfer = plan(&start.orbit, &target, MU).unwrap();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plan.json");
    let meta = Metadata {
        scenario: "baranov",
        mu_m3_s2: MU,
        total_delta_v_m_s: transfer.total_delta_v(),
        hohmann_delta_v_m_s: None,
    };
    export::plan::write_sidecar(&path, &meta, &transfer).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["scenario"], "baranov");
    assert_eq!(value["case"]["plane"], "coplanar");
    assert_eq!(value["case"]["case"], "non_intersecting");
    let maneuvers = value["maneuvers"].as_array().expect("maneuver array");
    assert_eq!(maneuvers.len(), 2);
    let tangential = maneuvers[0]["dv"][1].as_f64().unwrap();
    assert!((tangential - 51.8327).abs() < 1e-2);
    assert!(value["reference"]["v"].as_f64().unwrap() > 7_000.0);
    assert!(
        (value["total_delta_v_m_s"].as_f64().unwrap() - transfer.total_delta_v()).abs() < 1e-9
    );
}
