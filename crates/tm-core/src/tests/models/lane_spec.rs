use crate::{LANES, LaneSpec, Status};

#[test]
fn test_lanes_cover_every_status_in_order() {
    let statuses: Vec<Status> = LANES.iter().map(|lane| lane.status).collect();
    assert_eq!(statuses, Status::ALL.to_vec());
}

#[test]
fn test_for_status_matches_catalogue() {
    for status in Status::ALL {
        assert_eq!(LaneSpec::for_status(status).status, status);
    }
    assert_eq!(LaneSpec::for_status(Status::Progress).label, "In Progress");
}
