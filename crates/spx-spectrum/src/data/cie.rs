//! CIE 1931 2° standard observer color matching functions.
//!
//! Tabulated every 5 nm over 360-830 nm from the multi-lobe piecewise
//! Gaussian fit of Wyman, Sloan and Shirley, "Simple Analytic
//! Approximations to the CIE XYZ Color Matching Functions" (JCGT 2013).
//! The fit tracks the published CIE table to within about 1% of the peak;
//! the tiny negative tail of the X fit is clipped to zero.

/// Number of tabulated wavelengths.
pub const CIE_SAMPLES: usize = 95;

/// Tabulated wavelengths in nanometers.
pub const CIE_LAMBDA: [f32; CIE_SAMPLES] = [
    360.0, 365.0, 370.0, 375.0, 380.0, 385.0, 390.0, 395.0, 400.0, 405.0, 410.0, 415.0,
    420.0, 425.0, 430.0, 435.0, 440.0, 445.0, 450.0, 455.0, 460.0, 465.0, 470.0, 475.0,
    480.0, 485.0, 490.0, 495.0, 500.0, 505.0, 510.0, 515.0, 520.0, 525.0, 530.0, 535.0,
    540.0, 545.0, 550.0, 555.0, 560.0, 565.0, 570.0, 575.0, 580.0, 585.0, 590.0, 595.0,
    600.0, 605.0, 610.0, 615.0, 620.0, 625.0, 630.0, 635.0, 640.0, 645.0, 650.0, 655.0,
    660.0, 665.0, 670.0, 675.0, 680.0, 685.0, 690.0, 695.0, 700.0, 705.0, 710.0, 715.0,
    720.0, 725.0, 730.0, 735.0, 740.0, 745.0, 750.0, 755.0, 760.0, 765.0, 770.0, 775.0,
    780.0, 785.0, 790.0, 795.0, 800.0, 805.0, 810.0, 815.0, 820.0, 825.0, 830.0,
];

/// X matching function.
pub const CIE_X: [f32; CIE_SAMPLES] = [
    7.492912e-07, 3.517342e-06, 1.499154e-05, 5.798933e-05, 2.035351e-04, 6.481658e-04,
    1.872718e-03, 4.908974e-03, 1.167447e-02, 2.518886e-02, 4.930634e-02, 8.756218e-02,
    1.410732e-01, 2.061937e-01, 2.733931e-01, 3.288015e-01, 3.586007e-01, 3.584919e-01,
    3.437500e-01, 3.172852e-01, 2.812098e-01, 2.383330e-01, 1.918322e-01, 1.449688e-01,
    1.008766e-01, 6.240975e-02, 3.201221e-02, 1.158426e-02, 2.355260e-03, 4.351727e-03,
    1.648018e-02, 3.842698e-02, 6.984136e-02, 1.103571e-01, 1.596066e-01, 2.171888e-01,
    2.825969e-01, 3.551163e-01, 4.337147e-01, 5.169453e-01, 6.028876e-01, 6.891441e-01,
    7.729035e-01, 8.510719e-01, 9.204605e-01, 9.780119e-01, 1.021039e+00, 1.047451e+00,
    1.055926e+00, 1.041185e+00, 1.000205e+00, 9.360952e-01, 8.535370e-01, 7.582225e-01,
    6.562106e-01, 5.533021e-01, 4.545210e-01, 3.637627e-01, 2.836319e-01, 2.154589e-01,
    1.594581e-01, 1.149744e-01, 8.076600e-02, 5.527497e-02, 3.685539e-02, 2.394122e-02,
    1.515179e-02, 9.342314e-03, 5.611998e-03, 3.284378e-03, 1.872671e-03, 1.040261e-03,
    5.629838e-04, 2.968398e-04, 1.524828e-04, 7.631190e-05, 3.720800e-05, 1.767474e-05,
    8.179792e-06, 3.688112e-06, 1.620088e-06, 6.933393e-07, 2.890850e-07, 1.174297e-07,
    4.647324e-08, 1.791846e-08, 6.730865e-09, 2.463280e-09, 8.782724e-10, 3.050826e-10,
    1.032472e-10, 3.404172e-11, 1.093497e-11, 3.422127e-12, 1.043392e-12,
];

/// Y matching function.
pub const CIE_Y: [f32; CIE_SAMPLES] = [
    4.161319e-05, 6.644658e-05, 1.049031e-04, 1.637489e-04, 2.527216e-04, 3.856386e-04,
    5.818256e-04, 8.679191e-04, 1.280088e-03, 1.866700e-03, 2.691431e-03, 3.836773e-03,
    5.407831e-03, 7.536233e-03, 1.038388e-02, 1.414618e-02, 1.905433e-02, 2.537609e-02,
    3.341480e-02, 4.350655e-02, 5.601744e-02, 7.134608e-02, 8.994396e-02, 1.123753e-01,
    1.394422e-01, 1.723815e-01, 2.130688e-01, 2.640507e-01, 3.281168e-01, 4.071838e-01,
    5.006109e-01, 6.036455e-01, 7.071134e-01, 7.991975e-01, 8.690517e-01, 9.170858e-01,
    9.541694e-01, 9.799938e-01, 9.944625e-01, 9.979280e-01, 9.910816e-01, 9.748326e-01,
    9.501065e-01, 9.157806e-01, 8.721338e-01, 8.205557e-01, 7.625867e-01, 6.998768e-01,
    6.341359e-01, 5.670748e-01, 5.003385e-01, 4.354387e-01, 3.736918e-01, 3.161695e-01,
    2.636674e-01, 2.166941e-01, 1.754805e-01, 1.400072e-01, 1.100453e-01, 8.520408e-02,
    6.498186e-02, 4.881444e-02, 3.611729e-02, 2.631979e-02, 1.889046e-02, 1.335336e-02,
    9.296560e-03, 6.374343e-03, 4.304554e-03, 2.862854e-03, 1.875201e-03, 1.209688e-03,
    7.685562e-04, 4.808995e-04, 2.963529e-04, 1.798624e-04, 1.075097e-04, 6.328937e-05,
    3.669358e-05, 2.095200e-05, 1.178249e-05, 6.525659e-06, 3.559491e-06, 1.912174e-06,
    1.011680e-06, 5.271505e-07, 2.705218e-07, 1.367244e-07, 6.805588e-08, 3.336271e-08,
    1.610768e-08, 7.659156e-09, 3.586780e-09, 1.654263e-09, 7.514161e-10,
];

/// Z matching function.
pub const CIE_Z: [f32; CIE_SAMPLES] = [
    4.770175e-04, 9.753033e-04, 1.921643e-03, 3.649353e-03, 6.685041e-03, 1.184351e-02,
    2.044405e-02, 3.495757e-02, 6.078599e-02, 1.098965e-01, 2.050611e-01, 3.783860e-01,
    6.543020e-01, 1.016929e+00, 1.386823e+00, 1.644122e+00, 1.733914e+00, 1.776198e+00,
    1.781385e+00, 1.746756e+00, 1.671217e+00, 1.518440e+00, 1.294473e+00, 1.044059e+00,
    8.093472e-01, 6.148446e-01, 4.655254e-01, 3.542889e-01, 2.707631e-01, 2.064586e-01,
    1.559625e-01, 1.161300e-01, 8.499143e-02, 6.105815e-02, 4.303550e-02, 2.975426e-02,
    2.017845e-02, 1.342262e-02, 8.757821e-03, 5.604848e-03, 3.518363e-03, 2.166339e-03,
    1.308342e-03, 7.750417e-04, 4.503373e-04, 2.566609e-04, 1.434797e-04, 7.867382e-05,
    4.231351e-05, 2.232219e-05, 1.155057e-05, 5.862453e-06, 2.918530e-06, 1.425141e-06,
    6.825911e-07, 3.206804e-07, 1.477723e-07, 6.679176e-08, 2.961159e-08, 1.287684e-08,
    5.492450e-09, 2.297904e-09, 9.429889e-10, 3.795686e-10, 1.498591e-10, 5.803430e-11,
    2.204426e-11, 8.213253e-12, 3.001538e-12, 1.075924e-12, 3.782930e-13, 1.304620e-13,
    4.413150e-14, 1.464274e-14, 4.765463e-15, 1.521237e-15, 4.763185e-16, 1.462875e-16,
    4.406825e-17, 1.302127e-17, 3.773898e-18, 1.072842e-18, 2.991510e-19, 8.181898e-20,
    2.194961e-20, 5.775750e-21, 1.490730e-21, 3.773972e-22, 9.371461e-23, 2.282574e-23,
    5.453201e-24, 1.277871e-24, 2.937188e-25, 6.621942e-26, 1.464361e-26,
];
