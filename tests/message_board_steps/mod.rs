//! Step definitions for message board behaviour scenarios.


mod given;
