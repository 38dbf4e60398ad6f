//! Static content catalog keyed by classification output
//!
//! Hand-authored recommendation tables, mobility notes, and lifting insights.
//! Everything here is a flat lookup on the strategy labels or the ordinal
//! classes; no decision logic beyond choosing which table to return.
//! Demonstration video links are attached per item at authoring time.

use serde::Serialize;

use crate::analysis::{Classifications, SegmentClass, Strategy};

/// ---------------------------------------------------------------------------
/// Content Types
/// ---------------------------------------------------------------------------

/// One movement-pattern block within a recommendation set
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExerciseCategory {
  pub title: &'static str,
  pub strategy: &'static str,
  pub examples: &'static [&'static str],
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notes: Option<&'static str>,
  /// Demonstration video, resolved when the content is authored
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_url: Option<&'static str>,
}

/// Mobility work associated with a recommendation set
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MobilityConsiderations {
  pub tight_overactive: &'static [&'static str],
  pub weak_underactive: &'static [&'static str],
  pub symptoms: &'static [&'static str],
  pub prehab: &'static [&'static str],
}

/// A full recommendation set for one body region and strategy
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecommendationCategory {
  pub title: &'static str,
  pub description: &'static str,
  pub categories: &'static [ExerciseCategory],
  pub mobility: MobilityConsiderations,
}

/// One Olympic-lifting technique note
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LiftingInsight {
  /// Lift phase the note is about, shown as the bold lead-in
  pub phase: &'static str,
  pub detail: &'static str,
  /// Demonstration video, resolved when the content is authored
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_url: Option<&'static str>,
}

/// Muscles grouped by how readily they activate for a given build
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivationTiers {
  pub easy: &'static [&'static str],
  pub neutral: &'static [&'static str],
  pub difficult: &'static [&'static str],
}

/// Headline and leverage summary for one limb strategy
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrategyProfile {
  pub headline: &'static str,
  pub advantage: &'static str,
  pub disadvantage: &'static str,
}

/// ---------------------------------------------------------------------------
/// Lower Body
/// ---------------------------------------------------------------------------

static LEGS_LONG: RecommendationCategory = RecommendationCategory {
  title: "Lower Body Recommendations",
  description: "Long Limbs (Femur Dominant) — Your longer femurs create leverage challenges for anterior chain exercises but advantages for posterior chain movements.",
  categories: &[
    ExerciseCategory {
      title: "Squat Pattern",
      strategy: "Utilise variations that artificially force an upright torso to bias the quads and minimise shear force on the lower back.",
      examples: &[
        "Front Squat",
        "Heels-Elevated Front Squat (Cyclist Squat)",
        "High Bar Back Squat",
        "Heels-Elevated Safety Bar Squat (Narrow Stance)",
      ],
      notes: Some("Naturally tends toward a \"hingy\" squat (leaning forward) due to femur length. The posterior chain often takes over, leaving quads under-stimulated."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Hinge Pattern",
      strategy: "Focus on conscious quad engagement (\"push the floor away\") to prevent the hips from shooting up too fast, particularly in the first pull of O-Lifts.",
      examples: &[
        "Conventional Deadlift",
        "Trap Bar Deadlift (Low Handle)",
        "Snatch-Grip Deadlift",
      ],
      notes: Some("Mechanically well-suited for pulling from the floor. No issues emphasising the posterior chain, but may lack \"leg drive.\""),
      video_url: None,
    },
    ExerciseCategory {
      title: "Hip Thrust / Glute Accessory",
      strategy: "Conventional loading works best; no need for complex variations unless specifically maxing out glute strength.",
      examples: &["Barbell Hip Thrust", "Single-Leg Hip Thrust", "Kas Glute Bridge"],
      notes: Some("Glutes engage easily due to the long lever."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Single Leg Work",
      strategy: "Shorten the step length to mechanically force the knee over the toe, shifting focus back to the quads.",
      examples: &[
        "Walking Lunges (Short Steps/Quad dominant)",
        "Bulgarian Split Squat (Short Stance)",
        "Backwards Walking Lunges",
        "Backward Sled Drag",
      ],
      notes: Some("Natural tendency to (over)rely on the glutes."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Focus on quad isolation to compensate for natural posterior chain dominance.",
      examples: &["Hack Squat", "Narrow Stance Leg Press", "Leg Extensions"],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &["Hamstrings (often protective tension)", "Calves (Soleus)"],
    weak_underactive: &["VMO (Inner Quad)", "Anterior Core (Abdominals)"],
    symptoms: &[
      "Ankle Mobility Bottleneck: Long femurs require massive ankle dorsiflexion to keep the torso upright",
      "Lower Back Pumps: The lower back takes the brunt of the stabilisation",
    ],
    prehab: &[
      "Poliquin Step-Ups (Heel Elevated)",
      "Cossack Squats",
      "Weighted Ankle Dorsiflexion",
      "Pallof Press",
    ],
  },
};

static LEGS_SHORT: RecommendationCategory = RecommendationCategory {
  title: "Lower Body Recommendations",
  description: "Short Limbs (Torso Dominant) — Your body mechanics favour anterior chain exercises. Focus on maximising these advantages whilst addressing posterior chain development.",
  categories: &[
    ExerciseCategory {
      title: "Squat Pattern",
      strategy: "Focus on maximum loading and \"the basics.\" Since mechanics are optimal, simple progressive overload on the heaviest compounds yields the best results.",
      examples: &["Low Bar Back Squat", "High Bar Back Squat", "Front Squat", "Pause Squats"],
      notes: Some("Naturally built for squatting. The upright torso comes easily, meaning almost all variations will effectively stimulate the quads."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Hinge Pattern",
      strategy: "Use variations or technical adjustments that force the hips to stay higher or increase the stretch on the hamstrings.",
      examples: &[
        "RDL with Forefoot Elevated",
        "Stiff-Legged Deadlift",
        "Good Mornings",
        "Zercher Good Mornings",
      ],
      notes: Some("Tendency to \"squat the deadlift\" (drop hips too low) because the quads are dominant. Harder to access the hamstrings/glutes."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Hip Thrust / Glute Accessory",
      strategy: "Use alternative extension-based exercises where the quads cannot help, rather than bridge-based movements.",
      examples: &[
        "Reverse Hypers",
        "45-Degree Back Extension (Glute biased/Round back)",
        "Cable Pull-Throughs",
      ],
      notes: Some("Will often compensate by using quads (pushing back rather than up)."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Single Leg Work",
      strategy: "Lengthen the step/stride to verticalise the shin and put the glute in a deep stretch. Unilateral work is generally less effective for this body type than bilateral heavy loading.",
      examples: &[
        "Split Squats (Long Stance/Vertical Shin)",
        "Deficit Reverse Lunges (from a box)",
        "Single-Leg RDL",
        "Sled Push (Low Handles/Horizontal drive)",
      ],
      notes: Some("Naturally relies on quads; targeting the glutes is the challenge."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Focus on posterior chain isolation to compensate for natural quad dominance.",
      examples: &[
        "Lying Leg Curls",
        "Leg Press (Wide/High Feet placement)",
        "Glute-Ham Raise (GHR)",
        "Nordic Hamstring Curls",
      ],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &["Hip Flexors (Rectus Femoris/Psoas)", "Quadriceps"],
    weak_underactive: &["Glutes (Max and Medius)", "Hamstrings"],
    symptoms: &["Anterior Knee Pain (Patellar Tendonitis)", "Anterior Pelvic Tilt"],
    prehab: &[
      "Couch Stretch (long duration)",
      "Single-Leg RDL (sensory focus)",
      "Mini-Band Walks (Lateral/Monster)",
      "Nordic Hamstring Curls (eccentric)",
    ],
  },
};

/// ---------------------------------------------------------------------------
/// Upper Body Push
/// ---------------------------------------------------------------------------

static PUSH_LONG: RecommendationCategory = RecommendationCategory {
  title: "Upper Body Push Recommendations",
  description: "Long Arms, Short Torso — Your longer arms create leverage challenges for pressing movements. The anterior deltoids tend to dominate over chest and triceps.",
  categories: &[
    ExerciseCategory {
      title: "Horizontal Press (Bench Pattern)",
      strategy: "Reduce ROM to keep tension on the pecs, or use converging implements (dumbbells/cables) to get a peak contraction.",
      examples: &[
        "Floor Press (spares shoulders)",
        "Dumbbell Bench Press (neutral or pronated)",
        "Spoto Press (pausing 1-2 inches off chest)",
        "Decline Bench Press (reduces ROM)",
        "Weighted Dips (leaning forward)",
      ],
      notes: Some("Range of motion is excessive, placing high stress on the anterior delts at the bottom. The chest is often the weak link."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Vertical Press (Overhead Pattern)",
      strategy: "Focus on stability and tricep endurance. Use leg drive (Push Press) to bypass the mechanically weak starting position.",
      examples: &[
        "Push Press",
        "Z-Press (forces core stability)",
        "Pin Press (from eye level)",
        "Landmine Press (kneeling)",
      ],
      notes: Some("The distance to lockout is significant; requires immense tricep stability."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Isolation/Hypertrophy",
      strategy: "Shoulders are likely dominant; need to isolate the chest and thicken the triceps to support the long lever.",
      examples: &[
        "Cable Flyes (constant tension)",
        "Rolling Tricep Extensions",
        "Hex Press",
        "Pec Deck",
      ],
      notes: None,
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Build tricep mass and chest isolation to support the long lever arms.",
      examples: &[
        "Close-Grip Bench Press (board press/block press)",
        "Overhead Tricep Extensions (French Press)",
        "Lu Raises",
      ],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &[
      "Anterior Deltoids",
      "Upper Traps (compensating for weak leverage)",
      "Levator Scapulae",
    ],
    weak_underactive: &[
      "Mid-Back (Rhomboids)",
      "Triceps (specifically long head stability)",
      "Pectorals (as stabilisers)",
    ],
    symptoms: &[
      "Bicipital Tendonitis: The long lever places high stress on the bicep tendon",
      "Neck Stiffness: Over-reliance on Upper Traps",
    ],
    prehab: &[
      "Lu Raises (Full ROM Lateral Raise)",
      "Overhead Tricep Extensions (French Press)",
      "Band Pull-Aparts",
      "Isometric Overhead Holds (waiter's walks or barbell holds)",
    ],
  },
};

static PUSH_SHORT: RecommendationCategory = RecommendationCategory {
  title: "Upper Body Push Recommendations",
  description: "Short Arms, Long Torso — Your shorter arms provide mechanical advantages for pressing. Focus on maintaining shoulder health and developing the upper chest.",
  categories: &[
    ExerciseCategory {
      title: "Horizontal Press (Bench Pattern)",
      strategy: "Increase the ROM or create a deficit to force the muscle to stretch. Focus on upper chest (clavicular) which is often lagging.",
      examples: &[
        "Cambered Bar Bench Press",
        "Deficit Push-ups (hands on plates)",
        "Incline Barbell/DB Bench (steep angle)",
        "Guillotine Press (neck press - light weight only)",
      ],
      notes: Some("Naturally built for benching. The short ROM makes it easy to move heavy weight, but can lead to \"ego lifting.\""),
      video_url: None,
    },
    ExerciseCategory {
      title: "Vertical Press (Overhead Pattern)",
      strategy: "Strict, full-ROM pressing to maintain mobility. Lockout is easy, but mobility (tight lats/pecs) often limits the start position.",
      examples: &[
        "Strict Military Press",
        "Behind the Neck Press (if mobility allows)",
        "Handstand Push-ups",
        "Seated Dumbbell Press (no back support)",
      ],
      notes: None,
      video_url: None,
    },
    ExerciseCategory {
      title: "Isolation/Hypertrophy",
      strategy: "Chest and Triceps grow easily; need to focus on Shoulder health and Rear Delts to prevent internal rotation posture.",
      examples: &[
        "Face Pulls (high volume)",
        "Lateral Raises",
        "Front Raises (usually unnecessary, but okay for isolation)",
      ],
      notes: None,
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Focus on shoulder health and preventing internal rotation.",
      examples: &[
        "Trap-3 Raise (Prone Y)",
        "External Rotation work (Cable or DB)",
        "Serratus Wall Slides",
      ],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &[
      "Pectoralis Minor (tipping the scapula forward)",
      "Pectoralis Major",
      "Short Head of Biceps",
    ],
    weak_underactive: &[
      "External Rotators (Infraspinatus, Teres Minor)",
      "Lower Traps",
      "Serratus Anterior",
    ],
    symptoms: &[
      "Wrist/Elbow Pain: Caused by forcing positions shoulders cannot accommodate",
      "Anterior Shoulder Pain: Often impingement caused by humeral head sitting forward",
    ],
    prehab: &[
      "Doorway/Corner Pec Stretch",
      "Face Pulls with External Rotation",
      "Serratus Wall Slides",
      "Trap-3 Raise (Prone Y-Raise)",
    ],
  },
};

/// ---------------------------------------------------------------------------
/// Upper Body Pull
/// ---------------------------------------------------------------------------

static PULL_LONG: RecommendationCategory = RecommendationCategory {
  title: "Upper Body Pull Recommendations",
  description: "Long Arms, Short Torso (The \"Puller\" Build) — Your longer arms provide mechanical advantages for pulling. The lats engage easily, but mid-back thickness may lag.",
  categories: &[
    ExerciseCategory {
      title: "Vertical Pull",
      strategy: "Emphasise the stretch (bottom) where you are strongest, but use variations that force a full contraction at the top.",
      examples: &[
        "Weighted Pull-ups (Neutral Grip)",
        "Wide Grip Pull-ups",
        "Lat Pulldown (Mag-Grip/Neutral)",
        "Single-Arm Lat Pulldown",
      ],
      notes: Some("Naturally strong lats and great leverage for pulling, but the \"final inch\" (chest to bar) is difficult due to arm length."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Horizontal Pull (Rowing)",
      strategy: "Block movement/momentum to force strict scapular retraction. Focus on elbows out/wide to hit the upper back.",
      examples: &[
        "Chest-Supported Row (T-Bar or Machine)",
        "Seal Row (bench elevated)",
        "Face Pulls",
        "Rear Delt Flyes",
        "Wide-Grip Cable Row (to neck)",
      ],
      notes: Some("The challenge is retracting the scapula fully (Rhomboids/Traps are the weak link). Tendency to let shoulders roll forward."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Isolation/Hypertrophy",
      strategy: "Lats grow easily; focus must be on Mid-Back thickness and scapular control.",
      examples: &["Batwing Rows (isometric holds)", "Band Pull-Aparts", "Scapular Pull-ups"],
      notes: None,
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Build mid-back thickness and scapular control.",
      examples: &[
        "Farmer's Carries (heavy)",
        "Snatch-Grip Deadlift (for upper back volume)",
        "Kroc Rows (high rep)",
      ],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &["Latissimus Dorsi", "Teres Major"],
    weak_underactive: &["Rhomboids (Scapular Retraction)", "Mid-Traps", "Posterior Deltoids"],
    symptoms: &[
      "Thoracic Kyphosis (Slouching): Strong internal rotation of lats pulls shoulders forward",
      "Lower Back Pain (Extension): Tight lats limit arm elevation, causing lumbar compensation",
    ],
    prehab: &[
      "Batwing Rows (Chest Supported)",
      "Face Pulls",
      "T-Spine Extension (Foam Roller)",
      "Snatch-Grip Sotts Press (light)",
    ],
  },
};

static PULL_SHORT: RecommendationCategory = RecommendationCategory {
  title: "Upper Body Pull Recommendations",
  description: "Short Arms, Long Torso (The \"Grinder\" Build) — Your shorter arms create natural bicep/trap dominance. Focus on lat width and proper back engagement.",
  categories: &[
    ExerciseCategory {
      title: "Vertical Pull",
      strategy: "Use cues or grips that disengage the biceps (thumbless grip). Focus on \"driving elbows down\" rather than \"pulling up.\"",
      examples: &[
        "Thumbless Grip Pull-ups",
        "Straight-Arm Lat Pulldowns (Cable)",
        "1.5 Rep Pull-ups (full rep + bottom half rep)",
        "Kneeling Lat Pulldown (reduces body english)",
      ],
      notes: Some("Range of motion is short, but \"Short Arm\" dominance leads to pulling with biceps/traps rather than lats."),
      video_url: None,
    },
    ExerciseCategory {
      title: "Horizontal Pull (Rowing)",
      strategy: "Angles that emphasise the \"sweep\" of the lats towards the hips.",
      examples: &[
        "Single-Arm Dumbbell Row (\"Sawing\" motion towards hip)",
        "Meadows Row",
        "Pendlay Row (strict)",
        "Dorian Yates Row (underhand)",
      ],
      notes: Some("Mechanically strong, but lats (width) are the weak link."),
      video_url: Some("https://www.youtube.com/watch?v=sRRQgK8Fm44"),
    },
    ExerciseCategory {
      title: "Isolation/Hypertrophy",
      strategy: "Biceps and Traps grow easily; focus must be on Lat Width and low-lat engagement.",
      examples: &["Kayak Rows", "Dumbbell Pullovers", "Cable Pullovers"],
      notes: None,
      video_url: None,
    },
    ExerciseCategory {
      title: "Best Assistance Exercises",
      strategy: "Build lat width and maintain bicep tendon health.",
      examples: &[
        "Eccentric Bicep Curls (tendon health)",
        "Hammer Curls",
        "Cross-Body Hammer Curls",
      ],
      notes: None,
      video_url: None,
    },
  ],
  mobility: MobilityConsiderations {
    tight_overactive: &["Upper Traps (Levator Scapulae)", "Biceps/Forearms"],
    weak_underactive: &["Latissimus Dorsi (width/sweep)", "Lower Traps"],
    symptoms: &[
      "Neck/Cervical Pain: Over-reliance on upper traps causes chronic neck tension",
      "Medial Elbow Pain (Golfer's Elbow): Overusing flexors and biceps to initiate pulls",
    ],
    prehab: &[
      "Straight-Arm Lat Pulldowns (Cable or Band)",
      "Unilateral Prone Lower Trap Raises (Trap-3 Raise)",
      "Eccentric Bicep Curls",
      "Farmer's Carries",
    ],
  },
};

/// ---------------------------------------------------------------------------
/// Lookups
/// ---------------------------------------------------------------------------

pub fn leg_recommendations(strategy: Strategy) -> &'static RecommendationCategory {
  match strategy {
    Strategy::Long => &LEGS_LONG,
    Strategy::Short => &LEGS_SHORT,
  }
}

pub fn push_recommendations(strategy: Strategy) -> &'static RecommendationCategory {
  match strategy {
    Strategy::Long => &PUSH_LONG,
    Strategy::Short => &PUSH_SHORT,
  }
}

pub fn pull_recommendations(strategy: Strategy) -> &'static RecommendationCategory {
  match strategy {
    Strategy::Long => &PULL_LONG,
    Strategy::Short => &PULL_SHORT,
  }
}

/// Olympic-lifting technique notes for both limbs
pub fn lifting_insights(c: &Classifications) -> (&'static [LiftingInsight], &'static [LiftingInsight]) {
  let legs: &[LiftingInsight] = match c.leg_strategy {
    Strategy::Long => &[
      LiftingInsight {
        phase: "The Pull (The \"Stripper\" Pull)",
        detail: "Hips tend to shoot up faster than shoulders in the first pull, shifting load immediately to hamstrings and causing the chest to drop.",
        video_url: Some("https://www.youtube.com/watch?v=M2j1lp6a9lk"),
      },
      LiftingInsight {
        phase: "The Catch",
        detail: "Stability in the bottom of the Clean or Snatch is physically harder. The \"hole\" is deeper and centre of mass is further behind the knees.",
        video_url: None,
      },
      LiftingInsight {
        phase: "The Recovery",
        detail: "Standing up from heavy Cleans is the sticking point. You can pull the weight high, but the squat recovery is challenging.",
        video_url: None,
      },
    ],
    Strategy::Short => &[
      LiftingInsight {
        phase: "The Pull (Squatting the Pull)",
        detail: "Strong quads may cause you to start with hips too low and torso too upright, preventing proper hamstring tension and leading to a weak second pull.",
        video_url: None,
      },
      LiftingInsight {
        phase: "Bar Path",
        detail: "May struggle to get knees back out of the way of the bar in the first pull, causing the bar to loop around the knees.",
        video_url: None,
      },
      LiftingInsight {
        phase: "The Recovery",
        detail: "Generally excellent. If you can clean it, you can stand it up. Legs are rarely the limiting factor.",
        video_url: None,
      },
    ],
  };

  let arms: &[LiftingInsight] = match c.arm_strategy {
    Strategy::Long => &[
      LiftingInsight {
        phase: "The Pull (Contact Point)",
        detail: "Ideal build for pull mechanics. Long arms allow staying more upright in the start. Bar meets hips naturally without excessive arm bend.",
        video_url: None,
      },
      LiftingInsight {
        phase: "The Turnover",
        detail: "Generally smoother due to less restricting muscle mass, though long levers can make the turnover feel \"slow.\"",
        video_url: None,
      },
      LiftingInsight {
        phase: "The Jerk",
        detail: "Danger zone — the drive distance is massive. If the Anterior Delt fatigues, elbows tend to soften or wobble at lockout.",
        video_url: None,
      },
    ],
    Strategy::Short => &[
      LiftingInsight {
        phase: "The Pull (The \"Arm Bend\" Risk)",
        detail: "Dominant biceps and traps with short arms create a tendency for early arm bend, trying to \"muscle\" the weight up before full hip extension.",
        video_url: None,
      },
      LiftingInsight {
        phase: "Bar Path",
        detail: "Strong traps make the shrug powerful, but difficult lats may cause the bar to loop away after the explosion.",
        video_url: None,
      },
      LiftingInsight {
        phase: "The Catch",
        detail: "Strong rhomboids usually mean a very stable upper back in the catch position, provided the bar didn't loop too far forward.",
        video_url: None,
      },
    ],
  };

  (legs, arms)
}

/// Activation hierarchy (easy/neutral/difficult) for both limbs
pub fn activation_hierarchy(c: &Classifications) -> (ActivationTiers, ActivationTiers) {
  let legs = match c.leg_strategy {
    Strategy::Long => ActivationTiers {
      easy: &["Glutes", "Lower Back"],
      neutral: &["Hamstrings"],
      difficult: &["Quads (esp. VMO)", "Calves"],
    },
    Strategy::Short => ActivationTiers {
      easy: &["Quads", "Calves"],
      neutral: &["Hamstrings", "Adductors"],
      difficult: &["Glutes"],
    },
  };

  let arms = match c.arm_strategy {
    Strategy::Long => ActivationTiers {
      easy: &["Lats", "Anterior Deltoids"],
      neutral: &["Posterior Deltoids", "Medial Deltoids"],
      difficult: &["Traps", "Rhomboids", "Biceps", "Chest", "Triceps"],
    },
    Strategy::Short => ActivationTiers {
      easy: &["Pectorals", "Triceps", "Traps", "Rhomboids", "Biceps"],
      neutral: &["Medial Deltoids", "Posterior Deltoids"],
      difficult: &["Upper Chest", "Anterior Deltoids", "Lats"],
    },
  };

  (legs, arms)
}

/// Headline and leverage summary for the lower-body strategy card
pub fn leg_strategy_profile(strategy: Strategy) -> StrategyProfile {
  match strategy {
    Strategy::Long => StrategyProfile {
      headline: "Long Limbs (Femur Dominant)",
      advantage: "Posterior chain exercises (e.g., needs less assistance on deadlifts)",
      disadvantage: "Anterior chain exercises (e.g., needs more assistance on squats)",
    },
    Strategy::Short => StrategyProfile {
      headline: "Short Limbs (Torso Dominant)",
      advantage: "Anterior chain exercises (e.g., needs less assistance on squats)",
      disadvantage: "Posterior chain exercises (e.g., needs more assistance on deadlifts)",
    },
  }
}

/// Headline and leverage summary for the upper-body strategy card
pub fn arm_strategy_profile(strategy: Strategy) -> StrategyProfile {
  match strategy {
    Strategy::Long => StrategyProfile {
      headline: "Long Arms, Short Torso",
      advantage: "Pulling movements (e.g., needs less assistance on rows)",
      disadvantage: "Pressing movements (e.g., needs more assistance on bench press)",
    },
    Strategy::Short => StrategyProfile {
      headline: "Short Arms, Long Torso",
      advantage: "Pressing movements (e.g., needs less assistance on bench press)",
      disadvantage: "Pulling movements (e.g., needs more assistance on rows)",
    },
  }
}

/// ---------------------------------------------------------------------------
/// Range Badge Text
/// ---------------------------------------------------------------------------

pub fn tibia_range_text(class: SegmentClass) -> &'static str {
  match class {
    SegmentClass::Short => "75-78% of femur",
    SegmentClass::Average => "79-84% of femur",
    SegmentClass::Long => "85%+ of femur",
  }
}

pub fn ulna_range_text(class: SegmentClass) -> &'static str {
  match class {
    SegmentClass::Short => "75-78% of humerus",
    SegmentClass::Average => "79-84% of humerus",
    SegmentClass::Long => "85%+ of humerus",
  }
}

pub fn legs_range_text(class: SegmentClass) -> &'static str {
  match class {
    SegmentClass::Short => "40-43% of height",
    SegmentClass::Average => "44-47% of height",
    SegmentClass::Long => "47-51% of height",
  }
}

pub fn arms_range_text(class: SegmentClass) -> &'static str {
  match class {
    SegmentClass::Short => "Wingspan <1 cm longer than height",
    SegmentClass::Average => "Wingspan 1-5 cm longer than height",
    SegmentClass::Long => "Wingspan >5 cm longer than height",
  }
}
