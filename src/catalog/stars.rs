//! The 57 Nautical Almanac navigational stars plus Polaris
//!
//! Numbers follow the almanac ordering by descending SHA, with Polaris
//! appended as 58. Positions are J2000 from the Hipparcos main catalogue;
//! proper motions are in milliarcseconds per year.

use super::NavStar;

pub static NAV_STARS: [NavStar; 58] = [
    NavStar { number: 1, name: "Alpheratz", spectral_class: "B", ra_hours: 0.139769444, dec_deg: 29.09083333, pm_ra_mas_yr: 135.68, pm_dec_mas_yr: -162.95, magnitude: 2.07 },
    NavStar { number: 2, name: "Ankaa", spectral_class: "K0", ra_hours: 0.438019444, dec_deg: -42.30511111, pm_ra_mas_yr: 232.76, pm_dec_mas_yr: -353.64, magnitude: 2.4 },
    NavStar { number: 3, name: "Schedar", spectral_class: "K0", ra_hours: 0.675111111, dec_deg: 56.53750000, pm_ra_mas_yr: 50.36, pm_dec_mas_yr: -32.17, magnitude: 2.24 },
    NavStar { number: 4, name: "Diphda", spectral_class: "K0", ra_hours: 0.726452778, dec_deg: -17.98669444, pm_ra_mas_yr: 232.79, pm_dec_mas_yr: 32.71, magnitude: 2.04 },
    NavStar { number: 5, name: "Achernar", spectral_class: "B3", ra_hours: 1.628555556, dec_deg: -57.23666667, pm_ra_mas_yr: 88.02, pm_dec_mas_yr: -40.08, magnitude: 0.45 },
    NavStar { number: 6, name: "Hamal", spectral_class: "K2", ra_hours: 2.119527778, dec_deg: 23.46277778, pm_ra_mas_yr: 190.73, pm_dec_mas_yr: -145.77, magnitude: 2.01 },
    NavStar { number: 7, name: "Acamar", spectral_class: "A4", ra_hours: 2.971033333, dec_deg: -40.30472222, pm_ra_mas_yr: -53.53, pm_dec_mas_yr: 25.71, magnitude: 2.88 },
    NavStar { number: 8, name: "Menkar", spectral_class: "M2", ra_hours: 3.038000000, dec_deg: 4.09000000, pm_ra_mas_yr: -11.81, pm_dec_mas_yr: -78.76, magnitude: 2.54 },
    NavStar { number: 9, name: "Mirfak", spectral_class: "F5", ra_hours: 3.405375000, dec_deg: 49.86125000, pm_ra_mas_yr: 24.11, pm_dec_mas_yr: -26.01, magnitude: 1.79 },
    NavStar { number: 10, name: "Aldebaran", spectral_class: "K5", ra_hours: 4.598666667, dec_deg: 16.50972222, pm_ra_mas_yr: 62.78, pm_dec_mas_yr: -189.36, magnitude: 0.87 },
    NavStar { number: 11, name: "Rigel", spectral_class: "B8", ra_hours: 5.242305556, dec_deg: -8.20166667, pm_ra_mas_yr: 1.87, pm_dec_mas_yr: -0.56, magnitude: 0.18 },
    NavStar { number: 12, name: "Capella", spectral_class: "M1", ra_hours: 5.278138889, dec_deg: 45.99916667, pm_ra_mas_yr: 75.52, pm_dec_mas_yr: -427.13, magnitude: 0.08 },
    NavStar { number: 13, name: "Bellatrix", spectral_class: "B2", ra_hours: 5.418861111, dec_deg: 6.34972222, pm_ra_mas_yr: -8.75, pm_dec_mas_yr: -13.28, magnitude: 1.64 },
    NavStar { number: 14, name: "Elnath", spectral_class: "B7", ra_hours: 5.438194444, dec_deg: 28.60777778, pm_ra_mas_yr: 23.28, pm_dec_mas_yr: -174.22, magnitude: 1.65 },
    NavStar { number: 15, name: "Alnilam", spectral_class: "B0", ra_hours: 5.603555556, dec_deg: -1.20194444, pm_ra_mas_yr: 1.49, pm_dec_mas_yr: -1.06, magnitude: 1.69 },
    NavStar { number: 16, name: "Betelgeuse", spectral_class: "M2", ra_hours: 5.919527778, dec_deg: 7.40694444, pm_ra_mas_yr: 27.33, pm_dec_mas_yr: 10.86, magnitude: 0.45 },
    NavStar { number: 17, name: "Canopus", spectral_class: "F0", ra_hours: 6.399194444, dec_deg: -52.69583333, pm_ra_mas_yr: 19.99, pm_dec_mas_yr: 23.67, magnitude: -0.62 },
    NavStar { number: 18, name: "Sirius", spectral_class: "A0", ra_hours: 6.752583333, dec_deg: -16.71305556, pm_ra_mas_yr: -546.01, pm_dec_mas_yr: -1223.08, magnitude: -1.44 },
    NavStar { number: 19, name: "Adhara", spectral_class: "B2", ra_hours: 6.977111111, dec_deg: -28.97222222, pm_ra_mas_yr: 2.63, pm_dec_mas_yr: 2.29, magnitude: 1.5 },
    NavStar { number: 20, name: "Procyon", spectral_class: "F5", ra_hours: 7.655138889, dec_deg: 5.22750000, pm_ra_mas_yr: -716.57, pm_dec_mas_yr: -1034.58, magnitude: 0.4 },
    NavStar { number: 21, name: "Pollux", spectral_class: "K0", ra_hours: 7.755388889, dec_deg: 28.02638889, pm_ra_mas_yr: -625.69, pm_dec_mas_yr: -45.95, magnitude: 1.16 },
    NavStar { number: 22, name: "Avior", spectral_class: "K3", ra_hours: 8.375238889, dec_deg: -59.50952778, pm_ra_mas_yr: -25.34, pm_dec_mas_yr: 22.72, magnitude: 1.86 },
    NavStar { number: 23, name: "Suhail", spectral_class: "K4", ra_hours: 9.133272222, dec_deg: -43.43261111, pm_ra_mas_yr: -23.21, pm_dec_mas_yr: 14.28, magnitude: 2.23 },
    NavStar { number: 24, name: "Miaplacidus", spectral_class: "A2", ra_hours: 9.220066667, dec_deg: -69.71747222, pm_ra_mas_yr: -157.66, pm_dec_mas_yr: 108.91, magnitude: 1.67 },
    NavStar { number: 25, name: "Alphard", spectral_class: "K3", ra_hours: 9.459805556, dec_deg: -8.65861111, pm_ra_mas_yr: -14.49, pm_dec_mas_yr: 33.25, magnitude: 1.99 },
    NavStar { number: 26, name: "Regulus", spectral_class: "B7", ra_hours: 10.139583333, dec_deg: 11.96722222, pm_ra_mas_yr: -249.4, pm_dec_mas_yr: 4.91, magnitude: 1.36 },
    NavStar { number: 27, name: "Dubhe", spectral_class: "F7", ra_hours: 11.062166667, dec_deg: 61.75111111, pm_ra_mas_yr: -136.46, pm_dec_mas_yr: -35.25, magnitude: 1.81 },
    NavStar { number: 28, name: "Denebola", spectral_class: "A3", ra_hours: 11.817750000, dec_deg: 14.57222222, pm_ra_mas_yr: -499.02, pm_dec_mas_yr: -113.78, magnitude: 2.14 },
    NavStar { number: 29, name: "Gienah", spectral_class: "B8", ra_hours: 12.263472222, dec_deg: -17.54194444, pm_ra_mas_yr: -159.58, pm_dec_mas_yr: 22.31, magnitude: 2.58 },
    NavStar { number: 30, name: "Acrux", spectral_class: "B1", ra_hours: 12.443305556, dec_deg: -63.09909167, pm_ra_mas_yr: -35.37, pm_dec_mas_yr: -14.73, magnitude: 0.77 },
    NavStar { number: 31, name: "Gacrux", spectral_class: "M4", ra_hours: 12.519425000, dec_deg: -57.11255556, pm_ra_mas_yr: 27.94, pm_dec_mas_yr: -264.33, magnitude: 1.59 },
    NavStar { number: 32, name: "Alioth", spectral_class: "A0", ra_hours: 12.900444444, dec_deg: 55.95972222, pm_ra_mas_yr: 111.74, pm_dec_mas_yr: -8.99, magnitude: 1.76 },
    NavStar { number: 33, name: "Spica", spectral_class: "B1", ra_hours: 13.419888889, dec_deg: -11.16111111, pm_ra_mas_yr: -42.5, pm_dec_mas_yr: -31.73, magnitude: 0.98 },
    NavStar { number: 34, name: "Alkaid", spectral_class: "B3", ra_hours: 13.792375000, dec_deg: 49.31330556, pm_ra_mas_yr: -121.23, pm_dec_mas_yr: -15.56, magnitude: 1.85 },
    NavStar { number: 35, name: "Hadar", spectral_class: "B1", ra_hours: 14.063733333, dec_deg: -60.37297222, pm_ra_mas_yr: -33.96, pm_dec_mas_yr: -25.06, magnitude: 0.61 },
    NavStar { number: 36, name: "Menkent", spectral_class: "K0", ra_hours: 14.111477778, dec_deg: -36.36869444, pm_ra_mas_yr: -519.29, pm_dec_mas_yr: -517.87, magnitude: 2.06 },
    NavStar { number: 37, name: "Arcturus", spectral_class: "K2", ra_hours: 14.261208333, dec_deg: 19.18727778, pm_ra_mas_yr: -1093.45, pm_dec_mas_yr: -1999.4, magnitude: -0.05 },
    NavStar { number: 38, name: "Rigil Kentaurus", spectral_class: "G2", ra_hours: 14.661361111, dec_deg: -60.83513889, pm_ra_mas_yr: -3678.19, pm_dec_mas_yr: 481.84, magnitude: -0.01 },
    NavStar { number: 39, name: "Zubenelgenubi", spectral_class: "A3", ra_hours: 14.847994444, dec_deg: -16.04161111, pm_ra_mas_yr: -105.69, pm_dec_mas_yr: -69.0, magnitude: 2.75 },
    NavStar { number: 40, name: "Kochab", spectral_class: "K4", ra_hours: 14.845111111, dec_deg: 74.15555556, pm_ra_mas_yr: -32.29, pm_dec_mas_yr: 11.91, magnitude: 2.07 },
    NavStar { number: 41, name: "Alphecca", spectral_class: "A0", ra_hours: 15.578111111, dec_deg: 26.71500000, pm_ra_mas_yr: 120.38, pm_dec_mas_yr: -89.44, magnitude: 2.22 },
    NavStar { number: 42, name: "Antares", spectral_class: "M1", ra_hours: 16.490138889, dec_deg: -26.43194444, pm_ra_mas_yr: -10.16, pm_dec_mas_yr: -23.21, magnitude: 1.06 },
    NavStar { number: 43, name: "Atria", spectral_class: "K2", ra_hours: 16.811075000, dec_deg: -69.02763889, pm_ra_mas_yr: 17.85, pm_dec_mas_yr: -32.92, magnitude: 1.91 },
    NavStar { number: 44, name: "Sabik", spectral_class: "A2", ra_hours: 17.172961111, dec_deg: -15.72513889, pm_ra_mas_yr: 41.16, pm_dec_mas_yr: 97.65, magnitude: 2.43 },
    NavStar { number: 45, name: "Shaula", spectral_class: "B1", ra_hours: 17.560138889, dec_deg: -37.10361111, pm_ra_mas_yr: -8.9, pm_dec_mas_yr: -29.95, magnitude: 1.62 },
    NavStar { number: 46, name: "Rasalhague", spectral_class: "A5", ra_hours: 17.582222222, dec_deg: 12.56055556, pm_ra_mas_yr: 110.08, pm_dec_mas_yr: -222.61, magnitude: 2.08 },
    NavStar { number: 47, name: "Eltanin", spectral_class: "K5", ra_hours: 17.943438889, dec_deg: 51.48894444, pm_ra_mas_yr: -8.52, pm_dec_mas_yr: -23.05, magnitude: 2.24 },
    NavStar { number: 48, name: "Kaus Australis", spectral_class: "B9", ra_hours: 18.402888889, dec_deg: -34.38444444, pm_ra_mas_yr: -39.61, pm_dec_mas_yr: -124.05, magnitude: 1.79 },
    NavStar { number: 49, name: "Vega", spectral_class: "A0", ra_hours: 18.615611111, dec_deg: 38.78305556, pm_ra_mas_yr: 201.02, pm_dec_mas_yr: 287.46, magnitude: 0.03 },
    NavStar { number: 50, name: "Nunki", spectral_class: "B2", ra_hours: 18.921083333, dec_deg: -26.29666667, pm_ra_mas_yr: 13.87, pm_dec_mas_yr: -52.65, magnitude: 2.05 },
    NavStar { number: 51, name: "Altair", spectral_class: "A7", ra_hours: 19.846305556, dec_deg: 8.86750000, pm_ra_mas_yr: 536.82, pm_dec_mas_yr: 385.54, magnitude: 0.76 },
    NavStar { number: 52, name: "Peacock", spectral_class: "B2", ra_hours: 20.427472222, dec_deg: -56.73500000, pm_ra_mas_yr: 7.71, pm_dec_mas_yr: -86.15, magnitude: 1.94 },
    NavStar { number: 53, name: "Deneb", spectral_class: "A2", ra_hours: 20.690527778, dec_deg: 45.28027778, pm_ra_mas_yr: 1.56, pm_dec_mas_yr: 1.55, magnitude: 1.25 },
    NavStar { number: 54, name: "Enif", spectral_class: "K2", ra_hours: 21.736427778, dec_deg: 9.87500000, pm_ra_mas_yr: 30.02, pm_dec_mas_yr: 1.38, magnitude: 2.38 },
    NavStar { number: 55, name: "Al Na'ir", spectral_class: "B7", ra_hours: 22.137188889, dec_deg: -46.96061111, pm_ra_mas_yr: 127.6, pm_dec_mas_yr: -147.91, magnitude: 1.73 },
    NavStar { number: 56, name: "Fomalhaut", spectral_class: "A3", ra_hours: 22.960777778, dec_deg: -29.62194444, pm_ra_mas_yr: 329.22, pm_dec_mas_yr: -164.22, magnitude: 1.17 },
    NavStar { number: 57, name: "Markab", spectral_class: "B9", ra_hours: 23.079333333, dec_deg: 15.20527778, pm_ra_mas_yr: 61.1, pm_dec_mas_yr: -42.56, magnitude: 2.49 },
    NavStar { number: 58, name: "Polaris", spectral_class: "F7", ra_hours: 2.529750000, dec_deg: 89.26416667, pm_ra_mas_yr: 44.22, pm_dec_mas_yr: -11.74, magnitude: 1.97 },
];
