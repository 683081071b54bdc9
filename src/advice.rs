//! Static UX recommendations shown below the feeds.

/// One recommendation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub body: &'static str,
    pub example: Option<&'static str>,
}

pub const HEADING: &str = "3 UX improvements for your users";

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        title: "3-step flow with a built-in voice assistant",
        body: "A visual progress bar with photos of each step. If the user hesitates \
               for more than 30 seconds, automatic help kicks in: a popup offering \
               \"Call an advisor\" or \"Step-by-step guided mode\".",
        example: Some(
            "Step 1: choose recipient (contact photo) | Step 2: amount (large keypad) | \
             Step 3: confirmation (OTP code)",
        ),
    },
    Recommendation {
        title: "Smart double confirmation",
        body: "Before final validation, show a summary card with the recipient's photo \
               (if available), the total cost, and an OTP code sent by SMS to both \
               sender and recipient for amounts above 50 000 FCFA.",
        example: None,
    },
    Recommendation {
        title: "Permanent \"Simplified\" mode",
        body: "A visible \"Easy mode\" button at the top right that enlarges text by 30%, \
               simplifies the interface, reads amounts aloud automatically, and shows \
               only the 3 main actions.",
        example: None,
    },
];
