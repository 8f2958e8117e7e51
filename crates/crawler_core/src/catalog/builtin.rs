//! Shipped hardware tables.
//!
//! Ratios collected from manufacturer specs and community measurements.
//! Transmission tuples are (name, front reduction, rear reduction); axle
//! tuples are (name, reduction). Portal entries note the gear pairing they
//! were measured with.

pub(super) const TRANSMISSIONS: &[(&str, f64, f64)] = &[
    ("Axial 3-Gear", 2.600, 2.600),
    ("Axial AT6", 3.021, 4.120),
    ("Axial Capra - 34(32) Spur", 1.800, 1.800),
    ("Axial Capra UTB18 40 (48) Spur", 3.825, 3.825),
    ("Axial Capra UTB18 [TGH] 42 (48) Spur", 3.825, 3.825),
    ("Axial LCXU (Basecamp) - Portal", 1.643, 1.643),
    ("Axial LCXU (Basecamp) - Straight", 2.614, 2.614),
    ("Axial SCX10 Pro - 0% OD", 2.222, 2.222),
    ("Axial SCX10 Pro - 40% OD", 2.222, 3.322),
    ("Axial SCX10.3 Portal high 40(32) Spur", 1.520, 1.520),
    ("Axial SCX10.3 Portal low 40(32) Spur", 2.220, 2.220),
    ("Axial SCX10.3 Straight high 40(32) Spur", 2.590, 2.590),
    ("Axial SCX10.3 Straight low 40(32) Spur", 3.780, 3.780),
    ("Axial Yeti / RR10", 1.939, 1.939),
    ("CCW Hidden Ninja", 2.860, 3.600),
    ("Dlux Cheez Berger 17% OD - 48(48) Spur", 3.373, 4.000),
    ("Dlux Cheez Berger No OD - 48(48) Spur", 4.000, 4.000),
    ("Dlux Fargo 36(48) Spur", 9.000, 9.000),
    ("Dlux Ham Berger - 48(48) Spur", 5.000, 5.000),
    ("Dlux NOD-2 - 44(48) Spur", 4.000, 4.000),
    ("Dlux OD-3 - 44(48) Spur", 3.660, 4.411),
    ("Dlux OD-3 NO OD - 44(48) Spur", 3.667, 3.667),
    ("Dlux OD-4 - 36(48) Spur", 3.000, 4.000),
    ("Dlux Portal - 36(48) Spur", 3.000, 3.000),
    ("Dlux Slider - 48(48) Spur", 5.000, 5.000),
    ("DV8 HOOD - 44 Spur", 3.667, 4.000),
    ("DV8 BITFPITB - 48 Spur", 4.000, 3.000),
    ("DV8 Dual Nessie - 44 Spur", 3.667, 3.667),
    ("DV8 OG Dual Motor - 44 Spur", 3.667, 3.667),
    ("DV8 SMOL Dual Motor - 36 Spur", 3.000, 3.000),
    ("DV8 Offset Dual Motor - 35 Spur", 3.000, 3.000),
    ("DV8 8x8 - 44 Spur", 3.667, 3.667),
    ("ECX Temper - 60 Spur", 7.550, 7.550),
    ("Element Stealth KNK", 2.600, 3.267),
    ("Element Stealth No OD", 2.600, 2.600),
    ("Element Stealth Opt 1", 2.600, 2.748),
    ("Element Stealth Opt 2", 2.600, 2.908),
    ("Exo Alpinist 0% - 36(48) Spur", 4.910, 4.910),
    ("Exo Alpinist 28% - 36(48) Spur", 4.910, 6.540),
    ("Exo Boulderer - 36(48) Spur", 4.000, 4.000),
    ("Exo Trad Climber Alpinist - 36(48) Spur", 4.910, 4.910),
    ("Exo Twin Rope Dual Motor", 4.000, 4.000),
    ("High Altitude PS200", 1.540, 2.000),
    ("Hotline Performance ODD - 36(48) Spur", 3.000, 4.000),
    ("Hot Racing LCG - 52 Spur", 11.400, 11.400),
    ("HPI Venture Trans & Case - 60(48) Spur", 2.297, 2.297),
    ("Losi Comp Crawler - 30(48) Spur", 1.333, 1.333),
    ("MOA 1:1", 1.000, 1.000),
    ("MEUS Racing LCG-Gold Rush", 2.000, 2.533),
    ("Negative G F3 Transfer Case", 1.917, 1.917),
    ("Nordic Crawl ULV 40(48) Spur", 2.860, 2.860),
    ("Procrawler Grind 328 LCG OD", 1.950, 1.350),
    ("Procrawler Grind 431 LCG OD", 1.833, 2.500),
    ("Reefs XPT3 LCG - 36(48) Spur", 3.750, 3.750),
    ("Salinas Mullet", 2.294, 1.706),
    ("Salinas ODT V1 (High)", 1.529, 2.647),
    ("Salinas ODT V1 (Low)", 1.706, 2.294),
    ("Salinas ODT V1 (Med)", 1.706, 2.647),
    ("Supershafty SS-F6 0%", 1.929, 1.929),
    ("Supershafty SS-F6 18%", 1.929, 2.330),
    ("Supershafty SS-F6 26%", 1.929, 2.505),
    ("TGH 2.LOW", 1.940, 2.650),
    ("TGH Creeper-T", 1.900, 2.600),
    ("TGH O.G.", 1.920, 1.920),
    ("TGH O.G. OD", 1.660, 1.900),
    ("TGH T-210 - 26(32) Spur", 5.138, 7.007),
    ("ToyZuki 2.5 Transfercase", 1.800, 2.600),
    ("ToyZuki V1 Transfercase", 2.600, 2.600),
    ("Traxxas TRX-4 High Gear", 0.800, 0.800),
    ("Traxxas TRX-4 Low Gear", 2.000, 2.000),
    ("Traxxas TRX-4 Sport", 2.000, 2.000),
    ("VP VFD OD (21%)", 2.560, 3.150),
    ("VP VFD Twin High (46%)", 1.966, 3.150),
    ("VP VFD/VFD Twin Low (6.5%)", 2.950, 3.150),
];

pub(super) const AXLES: &[(&str, f64)] = &[
    ("Axial AF16P STD (12/29)", 7.994),
    ("Axial AF16P STD (13/28)", 7.124),
    ("Axial AF16P STD (14/27)", 6.379),
    ("Axial AF16P OD (12/29)", 7.064),
    ("Axial AF16P OD (13/28)", 6.296),
    ("Axial AF16P OD (14/27)", 5.637),
    ("Axial AR44 / AR45 / SCX Pro OD2", 3.000),
    ("Axial AR44 / AR45 / SCX Pro OD1", 3.375),
    ("Axial AR44 / AR45 / SCX Pro / Element", 3.750),
    ("Axial AR44 / AR45 / SCX Pro UD", 4.125),
    ("Axial AR45P / Capra / SCX Pro Portal OD2 (12/23)", 5.750),
    ("Axial AR45P / Capra / SCX Pro Portal OD1 (12/23)", 6.469),
    ("Axial AR45P / Capra / SCX Pro Portal (12/23)", 7.188),
    ("Axial AR45P / Capra / SCX Pro Portal UD (12/23)", 7.906),
    ("Axial AR45P / Capra / SCX Pro Portal OD2 (13/22)", 5.077),
    ("Axial AR45P / Capra / SCX Pro Portal OD1 (13/22)", 5.712),
    ("Axial AR45P / Capra / SCX Pro Portal (13/22)", 6.346),
    ("Axial AR45P / Capra / SCX Pro Portal UD (13/22)", 6.981),
    ("Axial AR45P / Capra / SCX Pro Portal OD2 (14/21)", 4.500),
    ("Axial AR45P / Capra / SCX Pro Portal OD1 (14/21)", 5.063),
    ("Axial AR45P / Capra / SCX Pro Portal (14/21)", 5.625),
    ("Axial AR45P / Capra / SCX Pro Portal UD (14/21)", 6.188),
    ("Axial AR45P / Capra / SCX Pro Portal OD2 (15/20)", 4.000),
    ("Axial AR45P / Capra / SCX Pro Portal OD1 (15/20)", 4.500),
    ("Axial AR45P / Capra / SCX Pro Portal (15/20)", 5.000),
    ("Axial AR45P / Capra / SCX Pro Portal UD (15/20)", 5.500),
    ("Axial AR45P / Capra / SCX Pro Portal OD2 (16/19)", 3.563),
    ("Axial AR45P / Capra / SCX Pro Portal OD1 (16/19)", 4.008),
    ("Axial AR45P / Capra / SCX Pro Portal (16/19)", 4.453),
    ("Axial AR45P / Capra / SCX Pro Portal UD (16/19)", 4.898),
    ("Axial AR60 OD", 2.571),
    ("Axial AR60 STD", 2.923),
    ("Axial AR60 UD", 3.308),
    ("Axial UTB18 STD (13/28) Dlux", 5.467),
    ("Axial UTB18 STD (14/27) TGH", 4.896),
    ("Axial UTB18 STD (15/26) STK", 4.400),
    ("Axial UTB18 STD (16/25) Treal", 3.966),
    ("Axial UTB18 STD (17/24) Treal", 3.584),
    ("Axial UTB18 OD (13/28) Dlux", 4.639),
    ("Axial UTB18 OD (14/27) TGH", 4.154),
    ("Axial UTB18 OD (15/26) STK", 3.733),
    ("Axial UTB18 OD (16/25) Treal", 3.365),
    ("Axial UTB18 OD (17/24) Treal", 3.041),
    ("Dlux AR60P OD (12/23)", 4.929),
    ("Dlux AR60P STD (12/23)", 5.603),
    ("Dlux AR60P UD (12/23)", 6.340),
    ("Dlux AR60P OD (13/22)", 4.352),
    ("Dlux AR60P STD (13/22)", 4.947),
    ("Dlux AR60P UD (13/22)", 5.598),
    ("Dlux AR60P OD (14/21)", 3.857),
    ("Dlux AR60P STD (14/21)", 4.385),
    ("Dlux AR60P UD (14/21)", 4.962),
    ("Dlux AR60P OD (15/20)", 3.429),
    ("Dlux AR60P STD (15/20)", 3.897),
    ("Dlux AR60P UD (15/20)", 4.410),
    ("Dlux AR60P OD (16/19)", 3.054),
    ("Dlux AR60P STD (16/19)", 3.471),
    ("Dlux AR60P UD (16/19)", 3.928),
    ("Dlux Superlite LOW MOA [USE MOA Trans]", 14.286),
    ("Dlux Superlite STD MOA [USE MOA Trans]", 11.429),
    ("Dlux SLP LOW (12/23) MOA [USE MOA Trans]", 27.382),
    ("Dlux SLP STD (12/23) MOA [USE MOA Trans]", 21.906),
    ("Dlux SLP LOW (15/20) MOA [USE MOA Trans]", 19.048),
    ("Dlux SLP STD (15/20) MOA [USE MOA Trans]", 15.239),
    ("ECX Temper", 2.714),
    ("Element IFS with SSD Portal (14/16)", 4.286),
    ("Element IFS with SSD Portal (16/14)", 3.281),
    ("Element Portal (15/20)", 5.500),
    ("Element Portal (12/23)", 7.906),
    ("HPI Venture", 3.308),
    ("Losi Comp Crawler Worm Drive", 21.000),
    ("MEUS Racing Nylon Portal OD2 (20/28)", 4.200),
    ("MEUS Racing Nylon Portal OD1 (20/28)", 4.725),
    ("MEUS Racing Nylon Portal (20/28)", 5.250),
    ("MEUS Racing Nylon Portal UD (20/28)", 5.775),
    ("RC4WD Bully 2 MOA [USE MOA Transmission]", 17.267),
    ("Traxxas TRX-4 OD", 7.028),
    ("Traxxas TRX-4 STD", 7.899),
    ("Traxxas TRX-4 UD", 8.944),
    ("VP Portal OD2 (18/30)", 5.000),
    ("VP Portal OD1 (18/30)", 5.625),
    ("VP Portal (18/30)", 6.250),
    ("VP Portal UD (18/30)", 6.875),
    ("VP Portal OD2 (20/28)", 4.200),
    ("VP Portal OD1 (20/28)", 4.725),
    ("VP Portal (20/28)", 5.250),
    ("VP Portal UD (20/28)", 5.775),
];
