use smarttasks_flow::ImageRef;

const UTH_LOGO: &[&str] = &[
    " _   _ _____ _   _ ",
    "| | | |_   _| | | |",
    "| | | | | | | |_| |",
    "| |_| | | | |  _  |",
    " \\___/  |_| |_| |_|",
];

const TIME_MANAGEMENT: &[&str] = &[
    "     .-------.      [x] standup    ",
    "    /  12    \\     [x] review     ",
    "   | 9   o-> 3|    [ ] deploy     ",
    "    \\   6    /     [ ] retro      ",
    "     '-------'                     ",
];

const WORK_EFFECTIVENESS: &[&str] = &[
    "            ___                    ",
    "      ___  |   |   ___             ",
    " ___ |   | |   |  |   |    /\\     ",
    "|   ||   | |   |  |   |   /  \\    ",
    "|___||___| |___|  |___|    ||      ",
];

const REMINDER_NOTIFICATION: &[&str] = &[
    "        .-.                        ",
    "      .'   '.    ( 09:00 )         ",
    "      |     |    Submit report     ",
    "     /_______\\   ( 14:30 )        ",
    "        (_)      Team meeting      ",
];

pub fn illustration(image: ImageRef) -> &'static [&'static str] {
    match image {
        ImageRef::UthLogo => UTH_LOGO,
        ImageRef::TimeManagement => TIME_MANAGEMENT,
        ImageRef::WorkEffectiveness => WORK_EFFECTIVENESS,
        ImageRef::ReminderNotification => REMINDER_NOTIFICATION,
    }
}

pub fn illustration_height(image: ImageRef) -> u16 {
    illustration(image).len() as u16
}

/// Art rows for `image`, or its alt text when fewer than `rows` lines fit.
pub fn illustration_or_alt(image: ImageRef, rows: u16) -> Vec<&'static str> {
    if rows >= illustration_height(image) {
        illustration(image).to_vec()
    } else {
        vec![image.description()]
    }
}
