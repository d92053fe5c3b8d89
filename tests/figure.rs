use egui::Color32;
use imuplot::{Figure, FigureApp, SampleTable};

fn capture() -> SampleTable {
    let csv = "idx,ax,ay,az,gx,gy,gz\n\
               0,0.1,0.2,0.3,1.0,1.1,1.2\n\
               1,0.4,0.5,0.6,1.3,1.4,1.5\n";
    SampleTable::from_reader(csv.as_bytes()).unwrap()
}

#[test]
fn acceleration_figure_layout() {
    let fig = Figure::acceleration(&capture());
    assert_eq!(fig.title, "Acceleration Data");
    assert_eq!(fig.x_label, "Sample");
    assert_eq!(fig.y_label, "Acceleration (raw)");

    let names: Vec<&str> = fig.traces.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Accel X", "Accel Y", "Accel Z"]);

    let colors: Vec<Color32> = fig.traces.iter().map(|t| t.color).collect();
    assert_eq!(colors, vec![Color32::RED, Color32::GREEN, Color32::BLUE]);

    assert_eq!(fig.traces[0].points, vec![[0.0, 0.1], [1.0, 0.4]]);
    assert_eq!(fig.traces[2].points, vec![[0.0, 0.3], [1.0, 0.6]]);
}

#[test]
fn angular_velocity_figure_layout() {
    let fig = Figure::angular_velocity(&capture());
    assert_eq!(fig.title, "Gyroscope Data");
    assert_eq!(fig.y_label, "Angular Velocity (raw)");

    let names: Vec<&str> = fig.traces.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Gyro X", "Gyro Y", "Gyro Z"]);

    assert_eq!(fig.traces[0].points, vec![[0.0, 1.0], [1.0, 1.3]]);
    assert_eq!(fig.traces[2].points, vec![[0.0, 1.2], [1.0, 1.5]]);
}

#[test]
fn close_request_advances_to_next_figure() {
    let table = capture();
    let mut app = FigureApp::new(vec![
        Figure::acceleration(&table),
        Figure::angular_velocity(&table),
    ]);
    assert_eq!(app.current_figure().title, "Acceleration Data");

    // The first dismissal reveals the gyroscope figure; the second one has
    // nothing left to reveal, so the window may actually close.
    assert!(app.advance());
    assert_eq!(app.current_figure().title, "Gyroscope Data");
    assert!(!app.advance());
    assert_eq!(app.current_figure().title, "Gyroscope Data");
}

#[test]
fn figure_construction_is_read_only() {
    let table = capture();
    let before = table.clone();

    // Building the same figure twice must yield identical series and leave
    // the table untouched.
    let first = Figure::acceleration(&table);
    let second = Figure::acceleration(&table);
    assert_eq!(first, second);
    assert_eq!(table, before);
}
